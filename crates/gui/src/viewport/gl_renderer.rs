use std::collections::HashMap;
use std::hash::Hash;

use glam::{Mat4, Vec3, Vec4};
use glow::HasContext;
use shared::PartId;

use super::camera::ArcBallCamera;
use super::mesh::{self, LineMeshData, MeshData};
use crate::error::{ViewerError, ViewerResult};
use crate::state::settings::{GridSettings, LightingSettings};

/// Height of the projected shadow above the ground plane (mm)
const SHADOW_LIFT: f32 = 0.5;
const SHADOW_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.22];

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Show grid
    pub grid_visible: bool,
    /// Background color RGB
    pub bg_color: [u8; 3],
    /// Assembly rotation about the vertical axis (radians)
    pub rotation: f32,
    pub lighting: LightingSettings,
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

struct GpuLines {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

// ── Main GL renderer ─────────────────────────────────────────

pub struct GlRenderer {
    mesh_program: glow::Program,
    shadow_program: glow::Program,
    line_program: glow::Program,
    grid: Option<GpuLines>,
    /// Cached grid settings to detect changes
    cached_grid_settings: Option<(f32, u32, f32)>,
    /// Part meshes keyed by part id
    part_meshes: HashMap<PartId, GpuMesh>,
    /// Cache version of the uploaded meshes, None until an upload succeeds
    mesh_version: Option<u64>,
    /// Failure of the last `prepare`, cleared by the next successful one
    last_error: Option<ViewerError>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context, grid: &GridSettings) -> ViewerResult<Self> {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG)?;
        let shadow_program = compile_program(gl, SHADOW_VERT, SHADOW_FRAG)?;
        let line_program = compile_program(gl, LINE_VERT, LINE_FRAG)?;

        let mut renderer = Self {
            mesh_program,
            shadow_program,
            line_program,
            grid: None,
            cached_grid_settings: None,
            part_meshes: HashMap::new(),
            mesh_version: None,
            last_error: None,
        };
        renderer.update_grid(gl, grid)?;
        tracing::info!("GL renderer initialized");
        Ok(renderer)
    }

    /// Update grid mesh based on settings
    fn update_grid(&mut self, gl: &glow::Context, settings: &GridSettings) -> ViewerResult<()> {
        let new_settings = (settings.size, settings.divisions, settings.opacity);

        if self.cached_grid_settings == Some(new_settings) {
            return Ok(());
        }

        if let Some(old) = self.grid.take() {
            delete_lines(gl, &old);
        }

        let grid_data = mesh::grid(settings.size, settings.divisions, settings.opacity);
        self.grid = Some(upload_lines(gl, &grid_data)?);
        self.cached_grid_settings = Some(new_settings);
        Ok(())
    }

    /// Upload pre-built part meshes to GPU, replacing previous meshes.
    ///
    /// All or nothing: on failure no part meshes stay resident and the
    /// version is not recorded, so the next call retries the upload.
    fn sync_from_meshes(
        &mut self,
        gl: &glow::Context,
        meshes: &HashMap<PartId, MeshData>,
        version: u64,
    ) -> ViewerResult<()> {
        if self.mesh_version == Some(version) {
            return Ok(());
        }
        self.mesh_version = None;

        for (_, mesh) in self.part_meshes.drain() {
            delete_mesh(gl, &mesh);
        }

        self.part_meshes = upload_all(
            meshes.iter().map(|(id, data)| (*id, data)),
            |data| upload_mesh(gl, data),
            |mesh| delete_mesh(gl, &mesh),
        )?;
        self.mesh_version = Some(version);
        Ok(())
    }

    /// Bring grid and part meshes up to date before painting.
    /// The outcome is kept for `last_error`.
    pub fn prepare(
        &mut self,
        gl: &glow::Context,
        grid: &GridSettings,
        meshes: &HashMap<PartId, MeshData>,
        version: u64,
    ) -> ViewerResult<()> {
        let result = self
            .update_grid(gl, grid)
            .and_then(|()| self.sync_from_meshes(gl, meshes, version));
        self.last_error = result.as_ref().err().cloned();
        result
    }

    pub fn last_error(&self) -> Option<&ViewerError> {
        self.last_error.as_ref()
    }

    /// Render the assembly
    pub fn paint(&self, gl: &glow::Context, camera: &ArcBallCamera, params: &RenderParams) {
        let aspect = params.viewport[2] / params.viewport[3].max(1.0);
        let vp = camera.view_projection(aspect);
        let model = Mat4::from_rotation_y(params.rotation);
        let light_dir = Vec3::from(params.lighting.light_position).normalize_or_zero();

        unsafe {
            let [x, y, w, h] = params.viewport.map(|v| v as i32);
            gl.viewport(x, y, w, h);
            gl.scissor(x, y, w, h);
            gl.enable(glow::SCISSOR_TEST);

            let [r, g, b] = params.bg_color.map(|c| c as f32 / 255.0);
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            // Ground grid (world frame, not rotated)
            if params.grid_visible {
                if let Some(ref grid) = self.grid {
                    gl.use_program(Some(self.line_program));
                    set_uniform(gl, self.line_program, "u_mvp", Uniform::Mat4(&vp));
                    draw_lines(gl, grid);
                }
            }

            // Planar shadows on y = 0
            if params.lighting.shadows {
                if let Some(shadow) = shadow_matrix(light_dir) {
                    gl.depth_mask(false);
                    gl.use_program(Some(self.shadow_program));
                    set_uniform(gl, self.shadow_program, "u_mvp", Uniform::Mat4(&vp));
                    set_uniform(gl, self.shadow_program, "u_shadow", Uniform::Mat4(&shadow));
                    set_uniform(gl, self.shadow_program, "u_model", Uniform::Mat4(&model));
                    set_uniform(gl, self.shadow_program, "u_color", Uniform::Vec4(SHADOW_COLOR));
                    for mesh in self.part_meshes.values() {
                        draw_mesh(gl, mesh);
                    }
                    gl.depth_mask(true);
                }
            }

            // Parts
            gl.disable(glow::BLEND);
            gl.use_program(Some(self.mesh_program));
            set_uniform(gl, self.mesh_program, "u_mvp", Uniform::Mat4(&vp));
            set_uniform(gl, self.mesh_program, "u_model", Uniform::Mat4(&model));
            set_uniform(gl, self.mesh_program, "u_light_dir", Uniform::Vec3(light_dir));
            let lighting = &params.lighting;
            set_uniform(gl, self.mesh_program, "u_ambient", Uniform::F32(lighting.ambient_intensity));
            set_uniform(
                gl,
                self.mesh_program,
                "u_directional",
                Uniform::F32(lighting.directional_intensity),
            );

            for mesh in self.part_meshes.values() {
                draw_mesh(gl, mesh);
            }

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.mesh_program);
            gl.delete_program(self.shadow_program);
            gl.delete_program(self.line_program);
        }
        if let Some(grid) = self.grid.take() {
            delete_lines(gl, &grid);
        }
        for (_, mesh) in self.part_meshes.drain() {
            delete_mesh(gl, &mesh);
        }
    }
}

/// Projection of geometry onto the ground plane along `light_dir`
/// (pointing toward the light). None when the light is at or below the horizon.
pub fn shadow_matrix(light_dir: Vec3) -> Option<Mat4> {
    if light_dir.y <= f32::EPSILON {
        return None;
    }
    let sx = -light_dir.x / light_dir.y;
    let sz = -light_dir.z / light_dir.y;
    Some(Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(sx, 0.0, sz, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, SHADOW_LIFT, 0.0, 1.0),
    ))
}

// ── GPU upload ───────────────────────────────────────────────

/// Upload every item, or none: after the first failure the handles created
/// so far are passed to `release` and the error is returned.
fn upload_all<K, D, H>(
    items: impl IntoIterator<Item = (K, D)>,
    mut upload: impl FnMut(D) -> ViewerResult<H>,
    mut release: impl FnMut(H),
) -> ViewerResult<HashMap<K, H>>
where
    K: Eq + Hash,
{
    let mut uploaded = HashMap::new();
    for (key, data) in items {
        match upload(data) {
            Ok(handle) => {
                uploaded.insert(key, handle);
            }
            Err(e) => {
                for (_, handle) in uploaded.drain() {
                    release(handle);
                }
                return Err(e);
            }
        }
    }
    Ok(uploaded)
}

/// Float attributes of an interleaved vertex: (location, component count)
const MESH_LAYOUT: &[(u32, i32)] = &[(0, 3), (1, 3), (2, 3)];
const LINE_LAYOUT: &[(u32, i32)] = &[(0, 3), (1, 4)];

/// Create a VAO with one interleaved f32 vertex buffer described by `layout`.
/// The VAO is left bound on success; nothing is left behind on failure.
unsafe fn upload_vertices(
    gl: &glow::Context,
    vertices: &[f32],
    layout: &[(u32, i32)],
) -> ViewerResult<(glow::VertexArray, glow::Buffer)> {
    let vao = gl.create_vertex_array().map_err(ViewerError::render_init)?;
    gl.bind_vertex_array(Some(vao));

    let vbo = match gl.create_buffer() {
        Ok(vbo) => vbo,
        Err(e) => {
            gl.bind_vertex_array(None);
            gl.delete_vertex_array(vao);
            return Err(ViewerError::render_init(e));
        }
    };
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
    gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);

    let floats: i32 = layout.iter().map(|&(_, n)| n).sum();
    let stride = floats * 4;
    let mut offset = 0;
    for &(location, count) in layout {
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_f32(location, count, glow::FLOAT, false, stride, offset * 4);
        offset += count;
    }
    Ok((vao, vbo))
}

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> ViewerResult<GpuMesh> {
    unsafe {
        let (vao, vbo) = upload_vertices(gl, &data.vertices, MESH_LAYOUT)?;

        let ibo = match gl.create_buffer() {
            Ok(ibo) => ibo,
            Err(e) => {
                gl.bind_vertex_array(None);
                gl.delete_vertex_array(vao);
                gl.delete_buffer(vbo);
                return Err(ViewerError::render_init(e));
            }
        };
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            as_bytes(&data.indices),
            glow::STATIC_DRAW,
        );
        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        })
    }
}

fn upload_lines(gl: &glow::Context, data: &LineMeshData) -> ViewerResult<GpuLines> {
    unsafe {
        let (vao, vbo) = upload_vertices(gl, &data.vertices, LINE_LAYOUT)?;
        gl.bind_vertex_array(None);
        Ok(GpuLines {
            vao,
            vbo,
            vertex_count: data.vertex_count() as i32,
        })
    }
}

fn delete_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    unsafe {
        gl.delete_vertex_array(mesh.vao);
        gl.delete_buffer(mesh.vbo);
        gl.delete_buffer(mesh.ibo);
    }
}

fn delete_lines(gl: &glow::Context, lines: &GpuLines) {
    unsafe {
        gl.delete_vertex_array(lines.vao);
        gl.delete_buffer(lines.vbo);
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

unsafe fn draw_lines(gl: &glow::Context, lines: &GpuLines) {
    gl.bind_vertex_array(Some(lines.vao));
    gl.draw_arrays(glow::LINES, 0, lines.vertex_count);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_shader(gl: &glow::Context, kind: u32, src: &str) -> ViewerResult<glow::Shader> {
    unsafe {
        let shader = gl.create_shader(kind).map_err(ViewerError::render_init)?;
        gl.shader_source(shader, src);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            tracing::error!("Shader compile error: {log}");
            return Err(ViewerError::render_init(format!("shader compile error: {log}")));
        }
        Ok(shader)
    }
}

fn compile_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> ViewerResult<glow::Program> {
    let vert = compile_shader(gl, glow::VERTEX_SHADER, vert_src)?;
    let frag = match compile_shader(gl, glow::FRAGMENT_SHADER, frag_src) {
        Ok(frag) => frag,
        Err(e) => {
            unsafe { gl.delete_shader(vert) };
            return Err(e);
        }
    };

    unsafe {
        let program = gl.create_program().map_err(ViewerError::render_init)?;
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);
        let log = if linked {
            String::new()
        } else {
            gl.get_program_info_log(program)
        };

        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !linked {
            gl.delete_program(program);
            tracing::error!("Program link error: {log}");
            return Err(ViewerError::render_init(format!("program link error: {log}")));
        }
        Ok(program)
    }
}

// ── Uniforms ─────────────────────────────────────────────────

enum Uniform<'a> {
    Mat4(&'a Mat4),
    Vec3(Vec3),
    Vec4([f32; 4]),
    F32(f32),
}

fn set_uniform(gl: &glow::Context, program: glow::Program, name: &str, value: Uniform<'_>) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        let loc = loc.as_ref();
        match value {
            Uniform::Mat4(m) => gl.uniform_matrix_4_f32_slice(loc, false, &m.to_cols_array()),
            Uniform::Vec3(v) => gl.uniform_3_f32(loc, v.x, v.y, v.z),
            Uniform::Vec4([x, y, z, w]) => gl.uniform_4_f32(loc, x, y, z, w),
            Uniform::F32(v) => gl.uniform_1_f32(loc, v),
        }
    }
}

/// Raw bytes of a vertex or index buffer (f32 / u32, no padding)
fn as_bytes<T: Copy>(slice: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(slice.as_ptr().cast::<u8>(), std::mem::size_of_val(slice)) }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;

out vec3 v_normal;
out vec3 v_color;

void main() {
    gl_Position = u_mvp * u_model * vec4(a_position, 1.0);
    v_normal = mat3(u_model) * a_normal;
    v_color = a_color;
}
"#;

const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_light_dir;
uniform float u_ambient;
uniform float u_directional;

in vec3 v_normal;
in vec3 v_color;

out vec4 frag_color;

void main() {
    vec3 n = normalize(v_normal);
    float diffuse = max(dot(n, u_light_dir), 0.0);
    float light = u_ambient + diffuse * u_directional;
    frag_color = vec4(clamp(v_color * light, 0.0, 1.0), 1.0);
}
"#;

const SHADOW_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;
uniform mat4 u_shadow;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;

void main() {
    gl_Position = u_mvp * u_shadow * u_model * vec4(a_position, 1.0);
}
"#;

const SHADOW_FRAG: &str = r#"#version 330 core
uniform vec4 u_color;
out vec4 frag_color;

void main() {
    frag_color = u_color;
}
"#;

const LINE_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const LINE_FRAG: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;

void main() {
    frag_color = v_color;
}
"#;
