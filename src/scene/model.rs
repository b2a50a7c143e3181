//! Per-frame display list.
//!
//! Components append styled nodes in painter's order. Every node carries its fill color, a final
//! opacity in `[0, 1]` and the accumulated affine transform from the enclosing groups, so the
//! list can be rasterized without any further scene knowledge.

use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::{OrreryError, OrreryResult};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    /// Stroked ellipse outline of `width`.
    Ring {
        center: Point,
        rx: f64,
        ry: f64,
        width: f64,
    },
    Rect {
        rect: Rect,
        corner_radius: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
    },
    /// Single line of text; `origin.y` is the baseline.
    Text {
        text: String,
        origin: Point,
        size: f64,
        bold: bool,
        anchor: TextAnchor,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawNode {
    /// Component that produced the node, e.g. `"planet.earth"`.
    pub tag: &'static str,
    pub shape: Shape,
    pub fill: Rgba8,
    pub opacity: f32,
    pub transform: Affine,
}

#[derive(Clone, Copy, Debug)]
struct Group {
    transform: Affine,
    opacity: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct DisplayList {
    pub background: Rgba8,
    nodes: Vec<DrawNode>,
    #[serde(skip)]
    stack: Vec<Group>,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(Rgba8::BLACK)
    }
}

impl DisplayList {
    pub fn new(background: Rgba8) -> Self {
        Self {
            background,
            nodes: Vec::new(),
            stack: vec![Group {
                transform: Affine::IDENTITY,
                opacity: 1.0,
            }],
        }
    }

    pub fn nodes(&self) -> &[DrawNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a DrawNode> + 'a {
        self.nodes.iter().filter(move |n| n.tag == tag)
    }

    fn top(&self) -> Group {
        self.stack.last().copied().unwrap_or(Group {
            transform: Affine::IDENTITY,
            opacity: 1.0,
        })
    }

    /// Current accumulated transform.
    pub fn transform(&self) -> Affine {
        self.top().transform
    }

    /// Run `f` with `transform` appended and group opacity multiplied by `opacity`.
    pub fn group<T>(
        &mut self,
        transform: Affine,
        opacity: f64,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let top = self.top();
        self.stack.push(Group {
            transform: top.transform * transform,
            opacity: top.opacity * sanitize_opacity(opacity),
        });
        let out = f(self);
        self.stack.pop();
        out
    }

    /// Append a node. Fully transparent nodes are culled.
    pub fn fill(&mut self, tag: &'static str, shape: Shape, fill: Rgba8, opacity: f64) {
        let top = self.top();
        let alpha = sanitize_opacity(opacity) * top.opacity * (f64::from(fill.a) / 255.0);
        if alpha <= 0.0 {
            return;
        }
        self.nodes.push(DrawNode {
            tag,
            shape,
            fill: fill.with_alpha(255),
            opacity: alpha.clamp(0.0, 1.0) as f32,
            transform: top.transform,
        });
    }

    /// Concentric translucent discs approximating a radial glow.
    pub fn glow(
        &mut self,
        tag: &'static str,
        center: Point,
        radius: f64,
        color: Rgba8,
        opacity: f64,
    ) {
        const STEPS: usize = 5;
        for i in 0..STEPS {
            let t = (i + 1) as f64 / STEPS as f64;
            self.fill(
                tag,
                Shape::Circle {
                    center,
                    radius: radius * (1.0 - 0.7 * (t - 1.0 / STEPS as f64)),
                },
                color,
                opacity / STEPS as f64,
            );
        }
    }

    /// Check every node for finite geometry.
    pub fn validate(&self) -> OrreryResult<()> {
        for (i, node) in self.nodes.iter().enumerate() {
            let finite = match &node.shape {
                Shape::Circle { center, radius } => pt_ok(*center) && radius.is_finite(),
                Shape::Ellipse { center, rx, ry } => {
                    pt_ok(*center) && rx.is_finite() && ry.is_finite()
                }
                Shape::Ring {
                    center,
                    rx,
                    ry,
                    width,
                } => pt_ok(*center) && rx.is_finite() && ry.is_finite() && width.is_finite(),
                Shape::Rect {
                    rect,
                    corner_radius,
                } => {
                    rect.x0.is_finite()
                        && rect.y0.is_finite()
                        && rect.x1.is_finite()
                        && rect.y1.is_finite()
                        && corner_radius.is_finite()
                }
                Shape::Polygon { points } => points.iter().all(|p| pt_ok(*p)),
                Shape::Line { from, to, width } => pt_ok(*from) && pt_ok(*to) && width.is_finite(),
                Shape::Text { origin, size, .. } => pt_ok(*origin) && size.is_finite(),
            };
            if !finite || !node.transform.is_finite() {
                return Err(OrreryError::evaluation(format!(
                    "display node {i} ('{}') has non-finite geometry",
                    node.tag
                )));
            }
        }
        Ok(())
    }
}

fn pt_ok(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn sanitize_opacity(o: f64) -> f64 {
    if o.is_finite() { o.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
