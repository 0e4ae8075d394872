//! Two triangles drawn from separate position and color vertex buffers
//! (slots 0 and 1), non-indexed.

use std::sync::Arc;

use ember::app::Window;
use ember::glam::Vec4;
use ember::renderer::FLAT_COLOR_SHADER;
use ember::{App, AppHandler, FrameState, GpuMesh, Renderer, VertexBufferDesc};

#[rustfmt::skip]
const POSITIONS: [f32; 12] = [
    -0.55, -0.5,
    -0.05, -0.5,
    -0.3,   0.0,

     0.05, -0.5,
     0.55, -0.5,
     0.3,   0.0,
];

#[rustfmt::skip]
const COLORS: [f32; 18] = [
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,

    1.0, 1.0, 0.0,
    0.0, 1.0, 1.0,
    1.0, 0.0, 1.0,
];

struct TwoTriangles;

impl AppHandler for TwoTriangles {
    fn init(renderer: &mut Renderer, _window: &Arc<Window>) -> ember::Result<Self> {
        let layouts = [VertexBufferDesc::positions(2), VertexBufferDesc::colors()];
        renderer.set_pipeline(FLAT_COLOR_SHADER, "flat_color.wgsl", &layouts);

        let mesh = GpuMesh::planar(renderer.device(), renderer.queue(), &POSITIONS, &COLORS, 2);
        log::info!("Uploaded {} vertices", mesh.vertex_count);
        renderer.set_mesh(mesh);
        renderer.set_tint(Vec4::ONE);

        Ok(Self)
    }

    fn update(&mut self, renderer: &mut Renderer, _window: &Arc<Window>, frame: &FrameState) {
        renderer.set_time(frame.time);
    }
}

fn main() -> ember::Result<()> {
    env_logger::init();
    App::new().with_title("Two Triangles").run::<TwoTriangles>()
}
