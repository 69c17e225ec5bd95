// Wavefront OBJ/MTL parsing into a flat, GPU-ready triangle list.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("{file}:{line}: invalid number {token:?}")]
    BadNumber {
        file: &'static str,
        line: usize,
        token: String,
    },
    #[error("{file}:{line}: malformed `{keyword}` statement")]
    Malformed {
        file: &'static str,
        line: usize,
        keyword: String,
    },
    #[error("obj:{line}: index {index} out of range (have {count})")]
    IndexOutOfRange { line: usize, index: i64, count: usize },
    #[error("obj contains no faces")]
    EmptyGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
    pub opacity: f32,
}

impl Material {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse: [1.0, 1.0, 1.0],
            specular: [0.07, 0.07, 0.07],
            shininess: 30.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MaterialLibrary {
    pub materials: Vec<Material>,
}

impl MaterialLibrary {
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// rgb diffuse, w = opacity
    pub diffuse: [f32; 4],
    /// rgb specular, w = shininess
    pub specular: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

fn parse_f32(file: &'static str, line: usize, token: &str) -> Result<f32, AssetError> {
    token.parse::<f32>().map_err(|_| AssetError::BadNumber {
        file,
        line,
        token: token.to_string(),
    })
}

fn parse_vec3(
    file: &'static str,
    line: usize,
    keyword: &str,
    args: &[&str],
) -> Result<[f32; 3], AssetError> {
    if args.len() < 3 {
        return Err(AssetError::Malformed {
            file,
            line,
            keyword: keyword.to_string(),
        });
    }
    Ok([
        parse_f32(file, line, args[0])?,
        parse_f32(file, line, args[1])?,
        parse_f32(file, line, args[2])?,
    ])
}

fn parse_scalar(file: &'static str, line: usize, keyword: &str, args: &[&str]) -> Result<f32, AssetError> {
    match args.first() {
        Some(tok) => parse_f32(file, line, tok),
        None => Err(AssetError::Malformed {
            file,
            line,
            keyword: keyword.to_string(),
        }),
    }
}

pub fn parse_mtl(src: &str) -> Result<MaterialLibrary, AssetError> {
    let mut lib = MaterialLibrary::default();
    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        if keyword == "newmtl" {
            let name = args.join(" ");
            if name.is_empty() {
                return Err(AssetError::Malformed {
                    file: "mtl",
                    line: line_no,
                    keyword: keyword.to_string(),
                });
            }
            lib.materials.push(Material::named(&name));
            continue;
        }
        // statements before the first `newmtl` have nothing to apply to
        let Some(mat) = lib.materials.last_mut() else {
            continue;
        };
        match keyword {
            "Kd" => mat.diffuse = parse_vec3("mtl", line_no, keyword, &args)?,
            "Ks" => mat.specular = parse_vec3("mtl", line_no, keyword, &args)?,
            "Ns" => mat.shininess = parse_scalar("mtl", line_no, keyword, &args)?,
            "d" => mat.opacity = parse_scalar("mtl", line_no, keyword, &args)?,
            "Tr" => mat.opacity = 1.0 - parse_scalar("mtl", line_no, keyword, &args)?,
            _ => {}
        }
    }
    Ok(lib)
}

/// Resolve a 1-based (or negative, relative) OBJ index against `count`.
fn resolve_index(line: usize, token: &str, count: usize) -> Result<usize, AssetError> {
    let index: i64 = token.parse().map_err(|_| AssetError::BadNumber {
        file: "obj",
        line,
        token: token.to_string(),
    })?;
    let resolved = if index > 0 {
        index - 1
    } else if index < 0 {
        count as i64 + index
    } else {
        -1
    };
    if resolved < 0 || resolved as usize >= count {
        return Err(AssetError::IndexOutOfRange { line, index, count });
    }
    Ok(resolved as usize)
}

struct FaceCorner {
    position: usize,
    normal: Option<usize>,
}

fn parse_corner(line: usize, token: &str, positions: usize, normals: usize) -> Result<FaceCorner, AssetError> {
    let mut fields = token.split('/');
    let position = resolve_index(line, fields.next().unwrap_or_default(), positions)?;
    let _texcoord = fields.next();
    let normal = match fields.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(line, n, normals)?),
        _ => None,
    };
    Ok(FaceCorner { position, normal })
}

/// Parse OBJ geometry, taking colours from `materials`. Faces are
/// fan-triangulated; corners without a normal get the flat face normal.
pub fn parse_obj(src: &str, materials: &MaterialLibrary) -> Result<Mesh, AssetError> {
    let fallback = Material::default();
    let mut current = &fallback;
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut mesh = Mesh::default();

    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        match keyword {
            "v" => positions.push(Vec3::from(parse_vec3("obj", line_no, keyword, &args)?)),
            "vn" => normals.push(Vec3::from(parse_vec3("obj", line_no, keyword, &args)?)),
            "usemtl" => {
                current = materials.get(&args.join(" ")).unwrap_or(&fallback);
            }
            "f" => {
                if args.len() < 3 {
                    return Err(AssetError::Malformed {
                        file: "obj",
                        line: line_no,
                        keyword: keyword.to_string(),
                    });
                }
                let corners = args
                    .iter()
                    .map(|t| parse_corner(line_no, t, positions.len(), normals.len()))
                    .collect::<Result<Vec<_>, _>>()?;
                let a = positions[corners[0].position];
                let b = positions[corners[1].position];
                let c = positions[corners[2].position];
                let face_normal = (b - a).cross(c - a).normalize_or_zero();
                let base = mesh.vertices.len() as u32;
                for corner in &corners {
                    let n = corner.normal.map(|ni| normals[ni]).unwrap_or(face_normal);
                    mesh.vertices.push(MeshVertex {
                        position: positions[corner.position].to_array(),
                        normal: n.to_array(),
                        diffuse: [
                            current.diffuse[0],
                            current.diffuse[1],
                            current.diffuse[2],
                            current.opacity,
                        ],
                        specular: [
                            current.specular[0],
                            current.specular[1],
                            current.specular[2],
                            current.shininess,
                        ],
                    });
                }
                for k in 1..corners.len() as u32 - 1 {
                    mesh.indices.extend_from_slice(&[base, base + k, base + k + 1]);
                }
            }
            _ => {}
        }
    }

    if mesh.indices.is_empty() {
        return Err(AssetError::EmptyGeometry);
    }
    Ok(mesh)
}
