use crate::ids::ObjectId;
use fontbridge_traits::{ProjectError, ProjectGraph, ResourceRequest, TargetId, TargetRef};
use std::collections::BTreeMap;

/// A reference to a file within the descriptor, keyed by object ID.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileReference {
    pub id: ObjectId,
    /// Virtual, slash-separated path within the project tree.
    pub path: String,
}

/// Membership of a file reference in a target's resources build phase.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BuildFile {
    pub id: ObjectId,
    pub file_ref: ObjectId,
}

/// A native build target: one app or extension produced by the project.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NativeTarget {
    id: TargetId,
    name: String,
    /// Build files in this target's resources build phase, in registration order.
    resources: Vec<ObjectId>,
}

impl NativeTarget {
    pub fn id(&self) -> &TargetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An in-memory Xcode-style build descriptor.
///
/// Holds the subset of descriptor state the injection pipeline reads and
/// writes. Registration consumes the project and returns the updated value,
/// matching the state-threading contract of `ProjectGraph`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PbxProject {
    targets: Vec<NativeTarget>,
    /// Group name -> file reference IDs, in registration order.
    groups: BTreeMap<String, Vec<ObjectId>>,
    file_references: BTreeMap<ObjectId, FileReference>,
    build_files: BTreeMap<ObjectId, BuildFile>,
    next_serial: u64,
}

impl PbxProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a project with one native target per name, in order.
    pub fn with_targets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut project = Self::new();
        for name in names {
            project.add_target(name);
        }
        project
    }

    /// Adds a native target and returns its generated identifier.
    pub fn add_target(&mut self, name: impl Into<String>) -> TargetId {
        let id = TargetId::new(self.allocate_id().as_str());
        self.targets.push(NativeTarget {
            id: id.clone(),
            name: name.into(),
            resources: Vec::new(),
        });
        id
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId::from_serial(self.next_serial);
        self.next_serial += 1;
        id
    }

    /// Virtual paths of the file references filed under `group`, in
    /// registration order. Empty if the group does not exist.
    pub fn group_files(&self, group: &str) -> Vec<&str> {
        self.groups
            .get(group)
            .map(|refs| {
                refs.iter()
                    .filter_map(|id| self.file_references.get(id))
                    .map(|file_ref| file_ref.path.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Virtual paths in the named target's resources build phase, in
    /// registration order. Empty if the target does not exist.
    pub fn resources_of(&self, target_name: &str) -> Vec<&str> {
        self.targets
            .iter()
            .find(|target| target.name == target_name)
            .map(|target| {
                target
                    .resources
                    .iter()
                    .filter_map(|id| self.build_files.get(id))
                    .filter_map(|build_file| self.file_references.get(&build_file.file_ref))
                    .map(|file_ref| file_ref.path.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn file_reference_count(&self) -> usize {
        self.file_references.len()
    }

    pub fn build_file_count(&self) -> usize {
        self.build_files.len()
    }
}

impl ProjectGraph for PbxProject {
    fn native_targets(&self) -> Vec<TargetRef> {
        self.targets
            .iter()
            .map(|target| TargetRef {
                id: target.id.clone(),
                name: target.name.clone(),
            })
            .collect()
    }

    fn add_resource_file(mut self, request: &ResourceRequest) -> Result<Self, ProjectError> {
        let position = self
            .targets
            .iter()
            .position(|target| target.id == request.target)
            .ok_or_else(|| ProjectError::UnknownTarget(request.target.to_string()))?;

        let file_ref_id = self.allocate_id();
        self.file_references.insert(
            file_ref_id.clone(),
            FileReference {
                id: file_ref_id.clone(),
                path: request.file_path.clone(),
            },
        );
        self.groups
            .entry(request.group_name.clone())
            .or_default()
            .push(file_ref_id.clone());

        if request.build_file {
            let build_file_id = self.allocate_id();
            self.build_files.insert(
                build_file_id.clone(),
                BuildFile {
                    id: build_file_id.clone(),
                    file_ref: file_ref_id,
                },
            );
            self.targets[position].resources.push(build_file_id);
        }

        Ok(self)
    }
}
