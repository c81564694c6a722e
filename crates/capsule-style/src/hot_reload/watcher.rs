//! File watching for theme hot-reload.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEvent, DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::derive::ButtonTheme;
use crate::store::ThemeStore;
use crate::theme::ThemeConfig;
use crate::{Error, Result};

/// Which store slot a watched file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTarget {
    /// A [`ThemeConfig`] override table.
    Config,
    /// A flat [`ButtonTheme`].
    Theme,
}

/// Event indicating a theme file changed.
#[derive(Debug, Clone)]
pub struct ThemeChangeEvent {
    pub path: PathBuf,
    pub target: ThemeTarget,
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Removed,
}

/// Watches theme files and feeds them into a [`ThemeStore`].
///
/// # Example
///
/// ```ignore
/// let store = ThemeStore::new();
/// let mut watcher = ThemeWatcher::new()?;
/// watcher.watch("theme/overrides.toml", ThemeTarget::Config)?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply_changes(&store, &changes);
/// }
/// ```
pub struct ThemeWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<DebouncedEvent>, notify::Error>>,
    watched: HashMap<PathBuf, ThemeTarget>,
}

impl ThemeWatcher {
    /// Create a new theme watcher.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched: HashMap::new(),
        })
    }

    /// Start watching a theme file.
    ///
    /// Watching an already-watched path only updates its target.
    pub fn watch(&mut self, path: impl AsRef<Path>, target: ThemeTarget) -> Result<()> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if let Some(existing) = self.watched.get_mut(&path) {
            *existing = target;
            return Ok(());
        }

        self.debouncer
            .watcher()
            .watch(&path, RecursiveMode::NonRecursive)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        tracing::info!("Watching theme file: {}", path.display());
        self.watched.insert(path, target);
        Ok(())
    }

    /// Stop watching a theme file. Unknown or missing paths are ignored.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let Ok(path) = path.as_ref().canonicalize() else {
            return Ok(());
        };

        if self.watched.remove(&path).is_some() {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!("Stopped watching theme file: {}", path.display());
        }

        Ok(())
    }

    /// Drain pending file events, one per changed file.
    pub fn poll(&mut self) -> Vec<ThemeChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any {
                            continue;
                        }
                        let Some(&target) = self.watched.get(&event.path) else {
                            continue;
                        };
                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(ThemeChangeEvent {
                            path: event.path,
                            target,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("File watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("File watcher disconnected");
                    break;
                }
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);
        changes
    }

    /// Reload changed files into `store`.
    ///
    /// A removed file clears its slot. A file that fails to parse leaves the
    /// previous value in place and is counted as a failure; the number of
    /// successfully applied changes is returned.
    pub fn apply_changes(&self, store: &ThemeStore, changes: &[ThemeChangeEvent]) -> usize {
        let mut applied = 0;

        for change in changes {
            let outcome = match (change.kind, change.target) {
                (ChangeKind::Removed, ThemeTarget::Config) => {
                    tracing::info!("Theme config removed: {}", change.path.display());
                    store.set_config(None);
                    Ok(())
                }
                (ChangeKind::Removed, ThemeTarget::Theme) => {
                    tracing::info!("Button theme removed: {}", change.path.display());
                    store.set_theme(None);
                    Ok(())
                }
                (ChangeKind::Modified, ThemeTarget::Config) => {
                    ThemeConfig::from_file(&change.path).map(|config| store.set_config(Some(config)))
                }
                (ChangeKind::Modified, ThemeTarget::Theme) => {
                    ButtonTheme::from_file(&change.path).map(|theme| store.set_theme(Some(theme)))
                }
            };

            match outcome {
                Ok(()) => applied += 1,
                Err(e) => {
                    tracing::error!("Failed to reload {}: {}", change.path.display(), e);
                }
            }
        }

        applied
    }

    /// Number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Watched paths and what they feed.
    pub fn watched(&self) -> impl Iterator<Item = (&Path, ThemeTarget)> {
        self.watched.iter().map(|(path, target)| (path.as_path(), *target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn watch_and_unwatch() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("theme.toml");
        fs::write(&file_path, "[light.primary.default]\ncolor = \"#fff\"\n").unwrap();

        let mut watcher = ThemeWatcher::new().unwrap();
        watcher.watch(&file_path, ThemeTarget::Config).unwrap();
        watcher.watch(&file_path, ThemeTarget::Config).unwrap();
        assert_eq!(watcher.watched_count(), 1);

        watcher.unwatch(&file_path).unwrap();
        assert_eq!(watcher.watched_count(), 0);
    }

    #[test]
    fn watching_missing_file_fails() {
        let dir = tempdir().unwrap();
        let mut watcher = ThemeWatcher::new().unwrap();

        let err = watcher
            .watch(dir.path().join("absent.toml"), ThemeTarget::Theme)
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn apply_changes_updates_store() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("overrides.toml");
        let theme_path = dir.path().join("button.json");
        fs::write(&config_path, "[dark.primary.success]\nborderColor = \"#0f0\"\n").unwrap();
        fs::write(&theme_path, "not json").unwrap();

        let store = ThemeStore::new();
        store.set_theme(Some(ButtonTheme::empty()));
        let watcher = ThemeWatcher::new().unwrap();

        let changes = [
            ThemeChangeEvent {
                path: config_path,
                target: ThemeTarget::Config,
                kind: ChangeKind::Modified,
            },
            ThemeChangeEvent {
                path: theme_path,
                target: ThemeTarget::Theme,
                kind: ChangeKind::Modified,
            },
        ];

        assert_eq!(watcher.apply_changes(&store, &changes), 1);
        assert_eq!(store.config().map(|c| c.len()), Some(1));
        // The broken theme file keeps the previous value.
        assert_eq!(store.theme().as_deref(), Some(&ButtonTheme::empty()));
    }

    #[test]
    fn removal_clears_slot() {
        let store = ThemeStore::new();
        store.set_config(Some(ThemeConfig::new()));
        let watcher = ThemeWatcher::new().unwrap();

        let removed = ThemeChangeEvent {
            path: PathBuf::from("gone.toml"),
            target: ThemeTarget::Config,
            kind: ChangeKind::Removed,
        };

        assert_eq!(watcher.apply_changes(&store, &[removed]), 1);
        assert!(store.config().is_none());
    }
}
