//! GLSL for the foliage layer
//!
//! The foliage blend runs on the GPU: the host uploads scatter/target
//! positions and seeds once, then sets `u_progress` and `u_time` each frame.
//! The easing and drift here must stay in step with
//! [`crate::animation::ease_in_out_cubic`] and [`crate::animation::FloatMotion::foliage`].

/// Vertex attribute slots used by [`FOLIAGE_VERTEX_SHADER`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoliageAttribute {
    ScatterPosition = 0,
    TargetPosition = 1,
    Random = 2,
}

impl FoliageAttribute {
    pub const ALL: [FoliageAttribute; 3] = [
        FoliageAttribute::ScatterPosition,
        FoliageAttribute::TargetPosition,
        FoliageAttribute::Random,
    ];

    pub fn location(self) -> u32 {
        self as u32
    }
}

pub const U_PROGRESS: &str = "u_progress";
pub const U_TIME: &str = "u_time";

/// Vertex shader for the foliage points
pub const FOLIAGE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_scatter_pos;
layout(location = 1) in vec3 a_tree_pos;
layout(location = 2) in float a_random;

uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_time;
uniform float u_progress;

out float v_alpha;

float ease_in_out_cubic(float x) {
    return x < 0.5 ? 4.0 * x * x * x : 1.0 - pow(-2.0 * x + 2.0, 3.0) / 2.0;
}

void main() {
    float t = ease_in_out_cubic(u_progress);

    vec3 pos = mix(a_scatter_pos, a_tree_pos, t);

    // Drift hard while scattered, barely breathe once assembled
    float float_scale = mix(0.5, 0.05, t);
    pos.x += sin(u_time * 2.0 + a_random * 10.0) * float_scale;
    pos.y += cos(u_time * 1.5 + a_random * 20.0) * float_scale;
    pos.z += sin(u_time * 2.2 + a_random * 30.0) * float_scale;

    vec4 view_pos = u_view * vec4(pos, 1.0);
    gl_Position = u_projection * view_pos;

    float size = mix(15.0, 8.0, t);
    gl_PointSize = size * (30.0 / -view_pos.z);

    v_alpha = 0.6 + 0.4 * sin(u_time + a_random * 10.0);
}
"#;

/// Fragment shader for the foliage points; colors are supplied by the renderer
pub const FOLIAGE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in float v_alpha;

uniform vec3 u_color_core;
uniform vec3 u_color_tip;
uniform vec3 u_color_rim;

out vec4 fragColor;

void main() {
    vec2 center = gl_PointCoord - vec2(0.5);
    float dist = length(center);
    if (dist > 0.5) {
        discard;
    }

    vec3 color = mix(u_color_tip, u_color_core, dist * 2.0);
    float rim = smoothstep(0.4, 0.5, dist);
    color = mix(color, u_color_rim, rim * 0.5);

    fragColor = vec4(color, v_alpha);
}
"#;
