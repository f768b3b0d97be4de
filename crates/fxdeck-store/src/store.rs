//! In-memory preset store backed by a directory of JSON files.
//!
//! The store owns every preset found under its root plus the list of known
//! categories. Category buckets are derived from each preset's `category`
//! field, so a preset is always in exactly one bucket and removing it from
//! the store removes it from its bucket.
//!
//! All operations are synchronous. The store assumes it is the only writer of
//! its root for as long as it lives; outside edits are picked up by the next
//! [`PresetStore::load`] and clobbered by the next [`PresetStore::save`].
//!
//! # Example
//!
//! ```rust,no_run
//! use fxdeck_store::PresetStore;
//!
//! let mut store = PresetStore::new("presets");
//! let report = store.load().unwrap();
//! println!("{} presets in {} categories", report.presets, report.categories);
//!
//! let preset = store
//!     .create("Warm Sunset", "color", "Color Grades", 0.7)
//!     .with_tags(["warm", "film"]);
//! store.save(&preset, None).unwrap();
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::bundle::PresetBundle;
use crate::error::StoreError;
use crate::paths::{
    category_dir_name, display_category_name, is_preset_file, numbered_preset_file_name,
    preset_path,
};
use crate::preset::{Preset, PresetId, UNASSIGNED_ID};

/// A preset plus the file it was loaded from or last saved to.
#[derive(Debug, Clone)]
struct PresetEntry {
    preset: Preset,
    path: Option<PathBuf>,
}

/// Outcome of [`PresetStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Presets loaded.
    pub presets: usize,
    /// Categories known after loading.
    pub categories: usize,
    /// Files that could not be read or parsed.
    pub skipped: usize,
}

/// Outcome of [`PresetStore::import`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Ids of the imported presets, in bundle order, after reassignment.
    pub imported: Vec<PresetId>,
    /// How many imported presets received a new id.
    pub reassigned: usize,
}

impl ImportReport {
    /// Number of presets imported.
    pub fn count(&self) -> usize {
        self.imported.len()
    }
}

/// Preset collection rooted at a directory.
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
    entries: Vec<PresetEntry>,
    categories: Vec<String>,
}

impl PresetStore {
    /// Create an empty store for `root`. Nothing is read until [`load`](Self::load).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Create a store for `root` and load it.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self::new(root);
        store.load()?;
        Ok(store)
    }

    /// The presets root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rebuild the store from the files under the root.
    ///
    /// Every immediate subdirectory is a category named after the directory
    /// (underscores to spaces, title-cased). Each `*.json` file inside it,
    /// except `preset_schema.json`, is parsed as a preset; a preset with an
    /// empty category takes the directory's category name. Files that cannot
    /// be read or parsed are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RootNotFound`] if the root does not exist and
    /// [`StoreError::ReadFile`] if it cannot be listed. The store keeps its
    /// previous contents in both cases.
    pub fn load(&mut self) -> Result<LoadReport, StoreError> {
        if !self.root.is_dir() {
            return Err(StoreError::RootNotFound(self.root.clone()));
        }

        let mut category_dirs =
            list_dir(&self.root).map_err(|e| StoreError::read_file(&self.root, e))?;
        category_dirs.retain(|p| p.is_dir());

        let mut entries: Vec<PresetEntry> = Vec::new();
        let mut categories: Vec<String> = Vec::new();
        let mut skipped = 0;

        for dir in category_dirs {
            let Some(dir_name) = dir.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("skipping category directory with non UTF-8 name: {:?}", dir);
                continue;
            };
            let category = display_category_name(dir_name);
            register(&mut categories, &category);

            let files = match list_dir(&dir) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!("failed to list {:?}: {}", dir, e);
                    continue;
                }
            };

            for path in files.into_iter().filter(|p| is_preset_file(p)) {
                match Preset::load(&path) {
                    Ok(mut preset) => {
                        if preset.category.is_empty() {
                            preset.category.clone_from(&category);
                        }
                        if preset.id != UNASSIGNED_ID
                            && entries.iter().any(|e| e.preset.id == preset.id)
                        {
                            tracing::warn!(
                                id = preset.id,
                                "duplicate preset id in {:?}",
                                path
                            );
                        }
                        register(&mut categories, &preset.category);
                        tracing::debug!("loaded preset '{}' from {:?}", preset.name, path);
                        entries.push(PresetEntry {
                            preset,
                            path: Some(path),
                        });
                    }
                    Err(e) => {
                        tracing::warn!("skipping preset file: {}", e);
                        skipped += 1;
                    }
                }
            }
        }

        self.entries = entries;
        self.categories = categories;

        let report = LoadReport {
            presets: self.entries.len(),
            categories: self.categories.len(),
            skipped,
        };
        tracing::info!(
            presets = report.presets,
            categories = report.categories,
            skipped = report.skipped,
            root = %self.root.display(),
            "loaded presets"
        );
        Ok(report)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no presets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all presets in load/insertion order.
    pub fn presets(&self) -> impl Iterator<Item = &Preset> {
        self.entries.iter().map(|e| &e.preset)
    }

    /// Known category names in discovery order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Presets whose category is exactly `category`.
    pub fn presets_in_category(&self, category: &str) -> Vec<&Preset> {
        self.presets().filter(|p| p.category == category).collect()
    }

    /// Look up a preset by id.
    pub fn get(&self, id: PresetId) -> Option<&Preset> {
        self.presets().find(|p| p.id == id)
    }

    /// Look up the first preset with exactly this name.
    pub fn get_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets().find(|p| p.name == name)
    }

    /// File backing the preset with `id`, if it came from or went to disk.
    pub fn path_of(&self, id: PresetId) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.preset.id == id)
            .and_then(|e| e.path.as_deref())
    }

    /// The id the next new preset would receive: one past the largest id,
    /// counting from zero so negative ids never yield a non-positive one.
    ///
    /// If the largest id is [`PresetId::MAX`], the smallest unused positive
    /// id is returned instead.
    pub fn next_id(&self) -> PresetId {
        let max = self
            .presets()
            .map(|p| p.id)
            .max()
            .unwrap_or(UNASSIGNED_ID)
            .max(UNASSIGNED_ID);
        max.checked_add(1).unwrap_or_else(|| self.lowest_free_id())
    }

    fn lowest_free_id(&self) -> PresetId {
        let used: HashSet<PresetId> = self.presets().map(|p| p.id).collect();
        (1..=PresetId::MAX)
            .find(|id| !used.contains(id))
            .unwrap_or(UNASSIGNED_ID)
    }

    /// Filter presets by a case-insensitive query and optional exact filters.
    ///
    /// A preset matches when `query` is a substring of its name, description
    /// or any tag. An empty query matches everything; an empty or absent
    /// filter is ignored. Results keep store order.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
        preset_type: Option<&str>,
    ) -> Vec<&Preset> {
        let needle = query.to_lowercase();
        let category = category.filter(|c| !c.is_empty());
        let preset_type = preset_type.filter(|t| !t.is_empty());

        self.presets()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| preset_type.is_none_or(|t| p.preset_type == t))
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Build a new preset with a fresh id. It is not stored or written until
    /// passed to [`save`](Self::save).
    pub fn create(
        &self,
        name: impl Into<String>,
        preset_type: impl Into<String>,
        category: impl Into<String>,
        intensity: f64,
    ) -> Preset {
        Preset::new(name)
            .with_type(preset_type)
            .with_category(category)
            .with_intensity(intensity)
            .with_id(self.next_id())
    }

    /// Write `preset` as indented JSON and return the path written.
    ///
    /// Without `explicit_path` the destination is
    /// `root/<category dir>/<file name>` (see [`crate::paths::preset_path`]),
    /// creating the category directory if needed. Existing files are
    /// overwritten; two presets deriving the same file name collide.
    ///
    /// If the store holds a preset with the same id and the derived path was
    /// used, that entry remembers the path so [`delete`](Self::delete) can
    /// remove it. A save to `explicit_path` is a copy: the entry keeps the
    /// file it was loaded from.
    pub fn save(
        &mut self,
        preset: &Preset,
        explicit_path: Option<&Path>,
    ) -> Result<PathBuf, StoreError> {
        match explicit_path {
            Some(path) => {
                preset.write_to(path)?;
                tracing::info!(id = preset.id, path = %path.display(), "saved preset copy");
                Ok(path.to_path_buf())
            }
            None => {
                let path = preset_path(&self.root, &preset.category, &preset.name);
                self.write_tracked(preset, path)
            }
        }
    }

    /// Save `preset` under its category directory without overwriting a file
    /// that belongs to another preset.
    ///
    /// The derived path is used when it is free or already backs this
    /// preset's id. Otherwise the file is named `<name>_<id>.json`, with a
    /// further `_<n>` suffix if that is taken too.
    pub fn save_unique(&mut self, preset: &Preset) -> Result<PathBuf, StoreError> {
        let path = self.free_path_for(preset);
        self.write_tracked(preset, path)
    }

    /// Where [`save_unique`](Self::save_unique) would write `preset`.
    pub fn free_path_for(&self, preset: &Preset) -> PathBuf {
        let derived = preset_path(&self.root, &preset.category, &preset.name);
        if self.is_free_for(&derived, preset.id) {
            return derived;
        }

        let dir = self.root.join(category_dir_name(&preset.category));
        let mut attempt = 1;
        loop {
            let candidate = dir.join(numbered_preset_file_name(&preset.name, preset.id, attempt));
            if self.is_free_for(&candidate, preset.id) {
                tracing::debug!(
                    id = preset.id,
                    taken = %derived.display(),
                    path = %candidate.display(),
                    "derived preset path is taken"
                );
                return candidate;
            }
            attempt += 1;
        }
    }

    fn is_free_for(&self, path: &Path, id: PresetId) -> bool {
        !path.exists() || self.path_of(id) == Some(path)
    }

    fn write_tracked(&mut self, preset: &Preset, path: PathBuf) -> Result<PathBuf, StoreError> {
        preset.write_to(&path)?;

        if preset.id != UNASSIGNED_ID
            && let Some(entry) = self.entries.iter_mut().find(|e| e.preset.id == preset.id)
        {
            entry.path = Some(path.clone());
        }

        tracing::info!(id = preset.id, path = %path.display(), "saved preset");
        Ok(path)
    }

    /// Give `preset` a fresh id if it has none, then [`save`](Self::save) it
    /// to its derived path.
    pub fn save_new(&mut self, preset: &mut Preset) -> Result<PathBuf, StoreError> {
        if preset.is_unassigned() {
            preset.id = self.next_id();
        }
        self.save(preset, None)
    }

    /// Remove the preset with `id`. Returns `false` if there is none.
    ///
    /// The backing file, if known and still present, is deleted first; if
    /// that fails the preset stays in the store.
    pub fn delete(&mut self, id: PresetId) -> Result<bool, StoreError> {
        let Some(index) = self.entries.iter().position(|e| e.preset.id == id) else {
            return Ok(false);
        };

        if let Some(path) = &self.entries[index].path
            && path.is_file()
        {
            std::fs::remove_file(path).map_err(|e| StoreError::remove_file(path, e))?;
            tracing::debug!("removed preset file {:?}", path);
        }

        let entry = self.entries.remove(index);
        tracing::info!(id, name = %entry.preset.name, "deleted preset");
        Ok(true)
    }

    /// Create the directory for a category and register it. Returns the
    /// directory path. Calling it for an existing category is harmless.
    pub fn add_category(&mut self, name: &str) -> Result<PathBuf, StoreError> {
        let dir = self.root.join(category_dir_name(name));
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::create_dir(&dir, e))?;
        register(&mut self.categories, name);
        Ok(dir)
    }

    /// Snapshot of the whole store as a bundle.
    pub fn to_bundle(&self) -> PresetBundle {
        PresetBundle::new(self.categories.clone(), self.presets().cloned().collect())
    }

    /// Write every preset to one bundle file. Returns the number exported.
    pub fn export_all(&self, path: impl AsRef<Path>) -> Result<usize, StoreError> {
        let path = path.as_ref();
        let bundle = self.to_bundle();
        bundle.save(path)?;
        tracing::info!(
            presets = bundle.preset_count,
            path = %path.display(),
            "exported presets"
        );
        Ok(bundle.preset_count)
    }

    /// Append every preset of a bundle file to the store.
    ///
    /// An imported preset whose id is unassigned or already taken gets one
    /// past the largest id in the store at that moment, so imported presets
    /// never share an id with each other or with existing ones. Unknown
    /// categories are registered. Imported presets are not written to disk.
    ///
    /// # Errors
    ///
    /// A missing or malformed bundle fails the whole import and leaves the
    /// store unchanged.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<ImportReport, StoreError> {
        let path = path.as_ref();
        let bundle = PresetBundle::load(path)?;
        let report = self.import_bundle(bundle);
        tracing::info!(
            imported = report.count(),
            reassigned = report.reassigned,
            path = %path.display(),
            "imported presets"
        );
        Ok(report)
    }

    /// Append the presets of an already-parsed bundle. See [`import`](Self::import).
    pub fn import_bundle(&mut self, bundle: PresetBundle) -> ImportReport {
        let mut report = ImportReport::default();

        for mut preset in bundle.presets {
            if preset.is_unassigned() || self.get(preset.id).is_some() {
                let id = self.next_id();
                tracing::debug!(from = preset.id, to = id, "reassigned imported preset id");
                preset.id = id;
                report.reassigned += 1;
            }

            register(&mut self.categories, &preset.category);
            report.imported.push(preset.id);
            self.entries.push(PresetEntry { preset, path: None });
        }

        report
    }
}

/// Add `name` to `categories` unless already present.
fn register(categories: &mut Vec<String>, name: &str) {
    if !categories.iter().any(|c| c == name) {
        categories.push(name.to_string());
    }
}

/// Sorted entries of a directory.
fn list_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}
