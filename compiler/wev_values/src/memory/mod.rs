//! In-memory output set.
//!
//! `MemoryOutputSet` allocates compound identities and stores array elements
//! and object fields in insertion order. It keeps a single state (no
//! snapshots, no copy-on-write) and is meant for hosts that evaluate
//! expressions outside a full dataflow analysis, and for tests.
//!
//! # Update policy
//!
//! A write through a path that resolves to exactly one container and one key
//! replaces the stored values (strong update). Any other write merges the new
//! values with the old ones (weak update), keeping `null` as a possibility
//! for keys that did not exist before.

use rustc_hash::FxHashMap;

use crate::{
    AnyKind, ArrayId, ClassName, EntryPath, MemberIdentifier, MemoryEntry, ObjectId, ObjectRef,
    OutputSet, PathStep, ResourceId, TypeFamilies, Value,
};

/// Ordered key/value storage of one array or object.
#[derive(Clone, Debug, Default)]
struct Slots {
    order: Vec<String>,
    values: FxHashMap<String, MemoryEntry>,
}

impl Slots {
    fn get(&self, key: &str) -> Option<&MemoryEntry> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: MemoryEntry) {
        if !self.values.contains_key(key) {
            self.order.push(key.to_owned());
        }
        self.values.insert(key.to_owned(), value);
    }

    fn merge(&mut self, key: &str, value: &MemoryEntry) {
        if let Some(existing) = self.values.get_mut(key) {
            existing.union(value);
        } else {
            let mut merged = value.clone();
            merged.insert(Value::Undefined);
            self.set(key, merged);
        }
    }

    fn has_any(&self, identifier: &MemberIdentifier) -> bool {
        match identifier {
            MemberIdentifier::Names(names) => names.iter().any(|n| self.values.contains_key(n)),
            MemberIdentifier::Any => !self.order.is_empty(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Container {
    Array(ArrayId),
    Object(ObjectId),
}

/// Single-state output set backed by hash maps.
#[derive(Debug, Default)]
pub struct MemoryOutputSet {
    next_array: u32,
    next_object: u32,
    next_resource: u32,
    arrays: FxHashMap<ArrayId, Slots>,
    objects: FxHashMap<ObjectId, Slots>,
    /// `(entry, alias)`: writes to `entry` are mirrored to `alias`.
    aliases: Vec<(EntryPath, EntryPath)>,
}

impl MemoryOutputSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self, container: Container) -> Option<&Slots> {
        match container {
            Container::Array(id) => self.arrays.get(&id),
            Container::Object(id) => self.objects.get(&id),
        }
    }

    fn slots_mut(&mut self, container: Container) -> &mut Slots {
        match container {
            Container::Array(id) => self.arrays.entry(id).or_default(),
            Container::Object(id) => self.objects.entry(id).or_default(),
        }
    }

    fn read_path(&self, path: &EntryPath) -> MemoryEntry {
        let Some((parent, step)) = path.parent() else {
            return path.root().clone();
        };
        let base = self.read_path(&parent);
        let mut values = Vec::new();
        for value in &base {
            self.read_member(value, step, &mut values);
        }
        MemoryEntry::from_values(values).unwrap_or_else(|| MemoryEntry::new(Value::Undefined))
    }

    fn read_member(&self, value: &Value, step: &PathStep, out: &mut Vec<Value>) {
        match (step, value) {
            (PathStep::Index(identifier), Value::Array(id)) => {
                self.read_slots(Container::Array(*id), identifier, out);
            }
            (PathStep::Field(identifier), Value::Object(object)) => {
                self.read_slots(Container::Object(object.id), identifier, out);
            }
            // String offsets read single characters.
            (PathStep::Index(_), Value::Str(_) | Value::Any(AnyKind::String)) => {
                out.push(Value::Any(AnyKind::String));
            }
            (PathStep::Index(_), Value::Any(kind))
                if kind.families().contains(TypeFamilies::ARRAY) =>
            {
                out.push(Value::Any(AnyKind::Value));
            }
            (PathStep::Field(_), Value::Any(kind))
                if kind.families().contains(TypeFamilies::OBJECT) =>
            {
                out.push(Value::Any(AnyKind::Value));
            }
            _ => out.push(Value::Undefined),
        }
    }

    fn read_slots(
        &self,
        container: Container,
        identifier: &MemberIdentifier,
        out: &mut Vec<Value>,
    ) {
        let Some(slots) = self.slots(container) else {
            out.push(Value::Undefined);
            return;
        };
        match identifier {
            MemberIdentifier::Names(names) => {
                for name in names {
                    match slots.get(name) {
                        Some(entry) => out.extend(entry.iter().cloned()),
                        None => out.push(Value::Undefined),
                    }
                }
            }
            MemberIdentifier::Any => {
                for key in &slots.order {
                    if let Some(entry) = slots.get(key) {
                        out.extend(entry.iter().cloned());
                    }
                }
                out.push(Value::Undefined);
            }
        }
    }

    /// Containers reached by the last step of `path`, with the step's identifier.
    ///
    /// The flag is set when the write may replace the stored values.
    fn targets<'p>(
        &self,
        path: &'p EntryPath,
    ) -> Option<(Vec<Container>, &'p MemberIdentifier, bool)> {
        let (parent, step) = path.parent()?;
        let base = self.read_path(&parent);
        let (identifier, containers): (&MemberIdentifier, Vec<Container>) = match step {
            PathStep::Index(identifier) => (
                identifier,
                base.iter()
                    .filter_map(|value| match value {
                        Value::Array(id) => Some(Container::Array(*id)),
                        _ => None,
                    })
                    .collect(),
            ),
            PathStep::Field(identifier) => (
                identifier,
                base.iter()
                    .filter_map(|value| match value {
                        Value::Object(object) => Some(Container::Object(object.id)),
                        _ => None,
                    })
                    .collect(),
            ),
        };
        let single_key = matches!(identifier, MemberIdentifier::Names(names) if names.len() == 1);
        let strong = single_key && base.count() == 1 && containers.len() == 1;
        Some((containers, identifier, strong))
    }

    fn write_direct(&mut self, path: &EntryPath, value: &MemoryEntry) {
        let Some((containers, identifier, strong)) = self.targets(path) else {
            tracing::trace!("write to a temporary entry ignored");
            return;
        };
        for container in containers {
            let slots = self.slots_mut(container);
            match identifier {
                MemberIdentifier::Names(names) => {
                    for name in names {
                        if strong {
                            slots.set(name, value.clone());
                        } else {
                            slots.merge(name, value);
                        }
                    }
                }
                MemberIdentifier::Any => {
                    for key in slots.order.clone() {
                        slots.merge(&key, value);
                    }
                }
            }
        }
    }

    fn keys_of(&self, entry: &EntryPath, pick: fn(&Value) -> Option<Container>) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for value in &self.read_path(entry) {
            let Some(slots) = pick(value).and_then(|c| self.slots(c)) else {
                continue;
            };
            for key in &slots.order {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }
}

impl OutputSet for MemoryOutputSet {
    fn create_array(&mut self) -> Value {
        let id = ArrayId::new(self.next_array);
        self.next_array = self.next_array.wrapping_add(1);
        self.arrays.insert(id, Slots::default());
        Value::Array(id)
    }

    fn create_object(&mut self, class: &ClassName) -> Value {
        let id = ObjectId::new(self.next_object);
        self.next_object = self.next_object.wrapping_add(1);
        self.objects.insert(id, Slots::default());
        Value::Object(ObjectRef {
            id,
            class: class.clone(),
        })
    }

    fn create_resource(&mut self) -> Value {
        let id = ResourceId::new(self.next_resource);
        self.next_resource = self.next_resource.wrapping_add(1);
        Value::Resource(id)
    }

    fn read_memory(&self, entry: &EntryPath) -> MemoryEntry {
        self.read_path(entry)
    }

    fn write_memory(&mut self, entry: &EntryPath, value: MemoryEntry) {
        self.write_direct(entry, &value);
        let mirrored: Vec<EntryPath> = self
            .aliases
            .iter()
            .filter(|(source, _)| source == entry)
            .map(|(_, alias)| alias.clone())
            .collect();
        for alias in &mirrored {
            self.write_direct(alias, &value);
        }
    }

    fn set_aliases(&mut self, entry: &EntryPath, aliases: &[EntryPath]) {
        let mut values: Vec<Value> = Vec::new();
        for alias in aliases {
            values.extend(self.read_path(alias));
        }
        if let Some(value) = MemoryEntry::from_values(values) {
            self.write_direct(entry, &value);
        }
        for alias in aliases {
            for pair in [(entry.clone(), alias.clone()), (alias.clone(), entry.clone())] {
                if !self.aliases.contains(&pair) {
                    self.aliases.push(pair);
                }
            }
        }
    }

    fn is_defined(&self, entry: &EntryPath) -> bool {
        match self.targets(entry) {
            None => true,
            Some((containers, identifier, _)) => containers
                .into_iter()
                .any(|c| self.slots(c).is_some_and(|slots| slots.has_any(identifier))),
        }
    }

    fn iterate_indexes(&self, entry: &EntryPath) -> Vec<String> {
        self.keys_of(entry, |value| match value {
            Value::Array(id) => Some(Container::Array(*id)),
            _ => None,
        })
    }

    fn iterate_fields(&self, entry: &EntryPath) -> Vec<String> {
        self.keys_of(entry, |value| match value {
            Value::Object(object) => Some(Container::Object(object.id)),
            _ => None,
        })
    }
}
