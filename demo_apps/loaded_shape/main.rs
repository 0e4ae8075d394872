//! The full pipeline: geometry and shader loaded from disk, one interleaved
//! vertex buffer, indexed draw, uniform tint + animation time updated each
//! frame.

use std::path::Path;
use std::sync::Arc;

use ember::app::Window;
use ember::glam::Vec4;
use ember::{App, AppHandler, FrameState, GeometryData, GpuMesh, Renderer, VertexBufferDesc};

struct LoadedShape;

impl AppHandler for LoadedShape {
    fn init(renderer: &mut Renderer, _window: &Arc<Window>) -> ember::Result<Self> {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");

        let geometry = GeometryData::load(data_dir.join("shape.txt"), 2)?;
        let layouts = [VertexBufferDesc::interleaved(geometry.dimensions)];
        renderer.set_pipeline_from_path(data_dir.join("shape.wgsl"), &layouts)?;

        let mesh = GpuMesh::interleaved(renderer.device(), renderer.queue(), &geometry);
        renderer.set_mesh(mesh);
        renderer.set_tint(Vec4::new(1.0, 0.9, 0.8, 1.0));

        Ok(Self)
    }

    fn update(&mut self, renderer: &mut Renderer, _window: &Arc<Window>, frame: &FrameState) {
        renderer.set_time(frame.time);
    }
}

fn main() -> ember::Result<()> {
    env_logger::init();
    App::new().with_title("Loaded Shape").run::<LoadedShape>()
}
