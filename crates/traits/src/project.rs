//! ProjectGraph contract for build-descriptor mutation.
//!
//! The host build tool owns the parsed project descriptor; this module only
//! defines the call contract the pipeline needs: look up native build targets
//! by name, and register a file as a build resource against a target.
//!
//! Registration is state-threading: each call consumes the project value and
//! returns the updated one, so cumulative registrations are carried through a
//! fold rather than through shared mutable state.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type for project-graph operations.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    #[error("Unknown target identifier: {0}")]
    UnknownTarget(String),

    #[error("Failed to register resource '{path}': {message}")]
    RegistrationFailed { path: String, message: String },
}

/// The canonical identifier of a native build target.
///
/// A newtype so target identifiers and target names cannot be mixed up;
/// lookups use the human-readable name, registration uses the identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TargetId(Arc<str>);

impl TargetId {
    /// Creates a new TargetId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this target identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A native build target as seen by the pipeline: identifier plus name.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TargetRef {
    pub id: TargetId,
    pub name: String,
}

/// One resource-registration request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResourceRequest {
    /// Virtual path of the file within the project tree, e.g. `Fonts/Inter.ttf`.
    /// Always slash-separated; this names a project-graph entry, not a
    /// filesystem location.
    pub file_path: String,
    /// Logical group the file reference is filed under, e.g. `Resources`.
    pub group_name: String,
    /// The target the resource is bound to.
    pub target: TargetId,
    /// When set, the file is also added to the target's resources build phase
    /// so it is packaged into the build output, not merely referenced.
    pub build_file: bool,
}

impl ResourceRequest {
    pub fn new(
        file_path: impl Into<String>,
        group_name: impl Into<String>,
        target: TargetId,
        build_file: bool,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            group_name: group_name.into(),
            target,
            build_file,
        }
    }
}

/// The build-descriptor contract the pipeline mutates through.
///
/// Implementations represent the parsed native project. The pipeline only
/// ever enumerates targets and registers resources; parsing and serialization
/// of the descriptor stay with the host.
pub trait ProjectGraph: Sized + fmt::Debug {
    /// Enumerates the project's native build targets.
    fn native_targets(&self) -> Vec<TargetRef>;

    /// Registers a file as a build resource, returning the updated project.
    ///
    /// Consumes `self`; callers thread the returned value into the next call.
    fn add_resource_file(self, request: &ResourceRequest) -> Result<Self, ProjectError>;

    /// Finds a target by exact, case-sensitive name. First match wins.
    fn target_named(&self, name: &str) -> Option<TargetRef> {
        self.native_targets()
            .into_iter()
            .find(|target| target.name == name)
    }
}
