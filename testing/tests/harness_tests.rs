//! Tests for the testing harness itself, driven through a real store.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklist_core::effect::Effect;
use tasklist_core::environment::IdGenerator;
use tasklist_core::reducer::Reducer;
use tasklist_core::snapshot::Persisted;
use tasklist_core::{smallvec, SmallVec};
use tasklist_runtime::storage::MemoryStorage;
use tasklist_runtime::{Store, StoreConfig, StoreError};
use tasklist_testing::assertions::{assert_no_effects, assert_persists_then_renders};
use tasklist_testing::properties::{blank_title, non_blank_title};
use tasklist_testing::{FailingStorage, RecordingRenderer, ReducerTest, SequentialIdGenerator};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct NoteState {
    notes: Vec<(String, String)>,
}

#[derive(Serialize, Deserialize)]
struct NoteSnapshot(Vec<(String, String)>);

impl Persisted for NoteState {
    type Snapshot = NoteSnapshot;

    fn snapshot(&self) -> NoteSnapshot {
        NoteSnapshot(self.notes.clone())
    }

    fn restore(snapshot: NoteSnapshot) -> Self {
        Self { notes: snapshot.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum NoteAction {
    Write(String),
}

#[derive(Clone)]
struct NoteEnv {
    ids: Arc<dyn IdGenerator>,
}

struct NoteReducer;

impl Reducer for NoteReducer {
    type State = NoteState;
    type Action = NoteAction;
    type Environment = NoteEnv;

    fn reduce(
        &self,
        state: &mut NoteState,
        action: NoteAction,
        env: &NoteEnv,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            NoteAction::Write(text) if text.trim().is_empty() => SmallVec::new(),
            NoteAction::Write(text) => {
                state.notes.push((env.ids.next_id(), text.trim().to_string()));
                smallvec![Effect::Persist, Effect::Render]
            },
        }
    }
}

fn env() -> NoteEnv {
    NoteEnv {
        ids: Arc::new(SequentialIdGenerator::new()),
    }
}

#[test]
fn test_reducer_test_uses_sequential_ids() {
    ReducerTest::new(NoteReducer)
        .with_env(env())
        .given_state(NoteState::default())
        .given_actions([NoteAction::Write("first".into())])
        .when_action(NoteAction::Write(" second ".into()))
        .then_state(|state| {
            assert_eq!(
                state.notes,
                vec![
                    ("id-1".to_string(), "first".to_string()),
                    ("id-2".to_string(), "second".to_string()),
                ]
            );
        })
        .then_effects(assert_persists_then_renders)
        .run();
}

#[test]
fn test_blank_write_has_no_effects() {
    ReducerTest::new(NoteReducer)
        .with_env(env())
        .given_state(NoteState::default())
        .when_action(NoteAction::Write("  ".into()))
        .then_state(|state| assert!(state.notes.is_empty()))
        .then_effects(assert_no_effects)
        .run();
}

#[test]
fn test_recording_renderer_sees_each_render() {
    let storage = MemoryStorage::new();
    let renderer = RecordingRenderer::new();
    let mut store = Store::new(
        NoteState::default(),
        NoteReducer,
        env(),
        storage.clone(),
        StoreConfig::new("notes"),
    )
    .with_renderer(renderer.clone());

    store.send(NoteAction::Write("hi".into())).unwrap();
    store.send(NoteAction::Write(" ".into())).unwrap();
    store.send(NoteAction::Write("there".into())).unwrap();

    assert_eq!(renderer.count(), 2);
    assert_eq!(storage.writes(), 2);
    assert_eq!(renderer.last().map(|s: NoteState| s.notes.len()), Some(2));
}

#[test]
fn test_failing_storage_surfaces_error() {
    let mut store = Store::new(
        NoteState::default(),
        NoteReducer,
        env(),
        FailingStorage,
        StoreConfig::new("notes"),
    );

    let result = store.send(NoteAction::Write("lost".into()));

    assert!(matches!(result, Err(StoreError::Storage(_))));
}

proptest::proptest! {
    #[test]
    fn non_blank_titles_survive_trimming(title in non_blank_title()) {
        proptest::prop_assert!(!title.trim().is_empty());
    }

    #[test]
    fn blank_titles_trim_to_nothing(title in blank_title()) {
        proptest::prop_assert!(title.trim().is_empty());
    }
}
