use crate::constants::{GEOMETRY_PATH, MATERIAL_PATH};
use crate::core::{LoadError, LoadProgress, Mesh, ModelLoad};
use crate::dom;
use instant::Instant;

/// Fetch and parse the material library, then the geometry that uses it.
/// A failed material load never proceeds to the geometry.
pub async fn load_model() -> anyhow::Result<Mesh> {
    let t0 = Instant::now();
    let mut load = ModelLoad::new(MATERIAL_PATH, GEOMETRY_PATH);
    while let Some(path) = load.next_path() {
        log::info!("[assets] started loading: {}", path);
        let fetched = dom::fetch_text(path).await.map_err(|e| format!("{:#}", e));
        match load.on_text(fetched)? {
            LoadProgress::Materials(count) => {
                log::info!("[assets] {} materials from {}", count, path);
            }
            LoadProgress::Model(mesh) => {
                log::info!(
                    "[assets] model ready: triangles={} in {:?}",
                    mesh.triangle_count(),
                    t0.elapsed()
                );
                if let Some((lo, hi)) = mesh.bounds() {
                    log::debug!("[assets] bounds {} .. {}", lo, hi);
                }
                return Ok(mesh);
            }
        }
    }
    Err(LoadError::Finished.into())
}
