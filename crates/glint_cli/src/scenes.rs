//! Demo scene construction.
//!
//! Pure configuration data: spheres, walls, a tetrahedron, a cylinder and
//! a cone arranged in a mirrored corner room.

use std::sync::Arc;

use glint_core::{
    Color, Cone, Cylinder, Material, Plane, Scene, SceneObject, Sphere, Surface, Texture, Vec3,
};

/// Build the demo scene. The optional texture wraps the red sphere.
pub fn demo_scene(texture: Option<Arc<Texture>>) -> Scene {
    let mut scene = Scene::new(Vec3::new(5.0, 2.0, -50.0));

    scene.add(SceneObject::new(
        Box::new(Sphere::new(Vec3::new(5.0, 5.0, -70.0), 2.5)),
        Material::new(Color::new(0.7, 0.1, 0.7)).with_reflectivity(0.3),
    ));

    scene.add(SceneObject::new(
        Box::new(Sphere::new(Vec3::new(-5.0, -5.0, -60.0), 4.5)),
        Material::new(Color::new(0.1, 0.1, 0.1))
            .with_refractivity(0.9, 1.01)
            .with_reflectivity(0.4),
    ));

    let mut vase = SceneObject::new(
        Box::new(Sphere::new(Vec3::new(-5.0, 5.0, -70.0), 2.5)),
        Material::new(Color::new(1.0, 0.0, 0.0)),
    );
    if let Some(texture) = texture {
        vase = vase.with_surface(Surface::Textured {
            texture,
            center: Vec3::new(-5.0, 5.0, -70.0),
            radius: 3.0,
        });
    }
    scene.add(vase);

    // Chequered floor and the two striped walls of the corner
    scene.add(
        SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(-20.0, -15.0, -40.0),
                Vec3::new(20.0, -15.0, -40.0),
                Vec3::new(20.0, -15.0, -200.0),
                Vec3::new(-20.0, -15.0, -200.0),
            )),
            Material::new(Color::ONE).without_specular(),
        )
        .with_surface(Surface::Checker {
            cell: 5.0,
            offset: Vec3::new(20.0, 0.0, 0.0),
            even: Color::new(0.4, 0.7, 0.8),
            odd: Color::new(0.8, 0.8, 0.0),
        }),
    );

    let corner_height = 20.0 * 3.0_f32.sqrt() - 15.0;
    let stripes = || Surface::Stripes {
        period: 20.0,
        even: Color::new(0.4, 0.0, 0.2),
        odd: Color::new(0.4, 0.7, 0.8),
    };
    scene.add(
        SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(0.0, corner_height, -200.0),
                Vec3::new(0.0, corner_height, -40.0),
                Vec3::new(-20.0, -15.0, -40.0),
                Vec3::new(-20.0, -15.0, -200.0),
            )),
            Material::new(Color::ONE).without_specular(),
        )
        .with_surface(stripes()),
    );
    scene.add(
        SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(20.0, -15.0, -200.0),
                Vec3::new(20.0, -15.0, -40.0),
                Vec3::new(0.0, corner_height, -40.0),
                Vec3::new(0.0, corner_height, -200.0),
            )),
            Material::new(Color::ONE).without_specular(),
        )
        .with_surface(stripes()),
    );

    // Tetrahedron of four green triangles
    let sqrt3 = 3.0_f32.sqrt();
    let green = || Material::new(Color::new(0.0, 0.7, 0.0));
    let base_a = Vec3::new(-6.0, 0.0, -2.0 * sqrt3 - 90.0);
    let base_b = Vec3::new(0.0, 0.0, 4.0 * sqrt3 - 90.0);
    let base_c = Vec3::new(6.0, 0.0, -2.0 * sqrt3 - 90.0);
    let tip = Vec3::new(0.0, -9.0, -90.0);
    scene.add(SceneObject::new(
        Box::new(Plane::triangle(base_a, base_b, base_c)),
        green(),
    ));
    scene.add(SceneObject::new(
        Box::new(Plane::triangle(base_a, tip, base_b)),
        green(),
    ));
    scene.add(SceneObject::new(
        Box::new(Plane::triangle(base_b, tip, base_c)),
        green(),
    ));
    scene.add(SceneObject::new(
        Box::new(Plane::triangle(base_c, tip, base_a)),
        green(),
    ));

    scene.add(SceneObject::new(
        Box::new(Cylinder::new(Vec3::new(5.0, -15.0, -70.0), 2.5, 7.0)),
        Material::new(Color::new(0.5, 0.0, 1.0)),
    ));

    scene.add(SceneObject::new(
        Box::new(Cone::new(Vec3::new(0.0, -15.0, -70.0), 2.5, 7.0)),
        Material::new(Color::new(1.0, 0.5, 0.0)),
    ));

    scene
}
