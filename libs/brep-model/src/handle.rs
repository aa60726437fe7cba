//! # Entity Handles
//!
//! Index-based references into the [`EntityGraph`](crate::EntityGraph)
//! arena. Every link between entities is one of these handles wrapped in an
//! `Option`; `None` is the absent sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the arena index of this handle.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for EntityRef {
            fn from(id: $name) -> Self {
                EntityRef::$kind(id)
            }
        }
    };
}

entity_id!(
    /// Handle of a [`Body`](crate::Body).
    BodyId => Body
);
entity_id!(
    /// Handle of a [`Transform`](crate::Transform).
    TransformId => Transform
);
entity_id!(
    /// Handle of a [`Lump`](crate::Lump).
    LumpId => Lump
);
entity_id!(
    /// Handle of a [`Shell`](crate::Shell).
    ShellId => Shell
);
entity_id!(
    /// Handle of a [`Face`](crate::Face).
    FaceId => Face
);
entity_id!(
    /// Handle of a [`Surface`](crate::Surface).
    SurfaceId => Surface
);
entity_id!(
    /// Handle of a [`Loop`](crate::Loop).
    LoopId => Loop
);
entity_id!(
    /// Handle of a [`Coedge`](crate::Coedge).
    CoedgeId => Coedge
);
entity_id!(
    /// Handle of an [`Edge`](crate::Edge).
    EdgeId => Edge
);
entity_id!(
    /// Handle of a [`Curve`](crate::Curve).
    CurveId => Curve
);
entity_id!(
    /// Handle of a [`Vertex`](crate::Vertex).
    VertexId => Vertex
);
entity_id!(
    /// Handle of a [`Point`](crate::Point).
    PointId => Point
);

/// The kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Body,
    Transform,
    Lump,
    Shell,
    Face,
    Surface,
    Loop,
    Coedge,
    Edge,
    Curve,
    Vertex,
    Point,
}

impl EntityKind {
    /// Returns the lowercase entity name.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Body => "body",
            EntityKind::Transform => "transform",
            EntityKind::Lump => "lump",
            EntityKind::Shell => "shell",
            EntityKind::Face => "face",
            EntityKind::Surface => "surface",
            EntityKind::Loop => "loop",
            EntityKind::Coedge => "coedge",
            EntityKind::Edge => "edge",
            EntityKind::Curve => "curve",
            EntityKind::Vertex => "vertex",
            EntityKind::Point => "point",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed entity handle.
///
/// Used where the kind of an entity is only known at runtime, e.g. at
/// conversion entry points that must reject a wrongly typed root.
///
/// # Example
///
/// ```rust
/// use brep_model::{EntityKind, EntityRef, LumpId};
///
/// let handle: EntityRef = LumpId(3).into();
/// assert_eq!(handle.kind(), EntityKind::Lump);
/// assert_eq!(handle.to_string(), "lump #3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Body(BodyId),
    Transform(TransformId),
    Lump(LumpId),
    Shell(ShellId),
    Face(FaceId),
    Surface(SurfaceId),
    Loop(LoopId),
    Coedge(CoedgeId),
    Edge(EdgeId),
    Curve(CurveId),
    Vertex(VertexId),
    Point(PointId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Body(_) => EntityKind::Body,
            EntityRef::Transform(_) => EntityKind::Transform,
            EntityRef::Lump(_) => EntityKind::Lump,
            EntityRef::Shell(_) => EntityKind::Shell,
            EntityRef::Face(_) => EntityKind::Face,
            EntityRef::Surface(_) => EntityKind::Surface,
            EntityRef::Loop(_) => EntityKind::Loop,
            EntityRef::Coedge(_) => EntityKind::Coedge,
            EntityRef::Edge(_) => EntityKind::Edge,
            EntityRef::Curve(_) => EntityKind::Curve,
            EntityRef::Vertex(_) => EntityKind::Vertex,
            EntityRef::Point(_) => EntityKind::Point,
        }
    }

    /// Returns the arena index of the referenced entity.
    pub fn index(&self) -> usize {
        match self {
            EntityRef::Body(id) => id.index(),
            EntityRef::Transform(id) => id.index(),
            EntityRef::Lump(id) => id.index(),
            EntityRef::Shell(id) => id.index(),
            EntityRef::Face(id) => id.index(),
            EntityRef::Surface(id) => id.index(),
            EntityRef::Loop(id) => id.index(),
            EntityRef::Coedge(id) => id.index(),
            EntityRef::Edge(id) => id.index(),
            EntityRef::Curve(id) => id.index(),
            EntityRef::Vertex(id) => id.index(),
            EntityRef::Point(id) => id.index(),
        }
    }

    /// Returns the body handle if this is a body reference.
    pub fn as_body(&self) -> Option<BodyId> {
        match self {
            EntityRef::Body(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the lump handle if this is a lump reference.
    pub fn as_lump(&self) -> Option<LumpId> {
        match self {
            EntityRef::Lump(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind(), self.index())
    }
}
