use taskboard::model::{Epic, Status, Subtask};
use taskboard::store::TaskStore;

fn subtask_update(id: u64, status: Status, epic_id: u64) -> Subtask {
    Subtask::with_id(id, "s", "", status, epic_id)
}

#[test]
fn epic_without_subtasks_is_new() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("empty", ""));

    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::New);
}

#[test]
fn status_walk_through_the_lattice() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("E1", ""));
    let s1 = store
        .create_subtask(Subtask::new("S1", "", Status::New, epic))
        .unwrap();
    let s2 = store
        .create_subtask(Subtask::new("S2", "", Status::New, epic))
        .unwrap();

    // All children new.
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::New);

    // One done, one new: mixed.
    store
        .update_subtask(subtask_update(s1, Status::Done, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::InProgress);

    // All done.
    store
        .update_subtask(subtask_update(s2, Status::Done, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::Done);

    // Removing a done child leaves only done children.
    store.remove_subtask_by_id(s1).unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::Done);

    // Removing the last child empties the epic.
    store.remove_subtask_by_id(s2).unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::New);
    assert!(store.epic_by_id(epic).unwrap().subtask_ids.is_empty());
}

#[test]
fn any_in_progress_child_makes_the_epic_in_progress() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("e", ""));
    let child = store
        .create_subtask(Subtask::new("s", "", Status::New, epic))
        .unwrap();

    store
        .update_subtask(subtask_update(child, Status::InProgress, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::InProgress);
}

#[test]
fn creating_a_subtask_recomputes_a_done_epic() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("e", ""));
    let done = store
        .create_subtask(Subtask::new("done", "", Status::New, epic))
        .unwrap();
    store
        .update_subtask(subtask_update(done, Status::Done, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::Done);

    // A fresh child always lands as New, pulling the epic out of Done.
    store
        .create_subtask(Subtask::new("late", "", Status::Done, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::InProgress);
}

#[test]
fn direct_epic_status_updates_do_not_survive_subtask_changes() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("e", ""));
    let child = store
        .create_subtask(Subtask::new("s", "", Status::New, epic))
        .unwrap();

    store
        .update_epic(Epic::with_id(epic, "e", "", Status::Done))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::Done);

    // The next recomputation wins.
    store
        .update_subtask(subtask_update(child, Status::New, epic))
        .unwrap();
    assert_eq!(store.epic_by_id(epic).unwrap().status(), Status::New);
}

#[test]
fn removing_an_epic_cascades_to_its_subtasks() {
    let mut store = TaskStore::new();
    let doomed = store.create_epic(Epic::new("doomed", ""));
    let kept = store.create_epic(Epic::new("kept", ""));

    store
        .create_subtask(Subtask::new("a", "", Status::New, doomed))
        .unwrap();
    store
        .create_subtask(Subtask::new("b", "", Status::New, doomed))
        .unwrap();
    let survivor = store
        .create_subtask(Subtask::new("c", "", Status::New, kept))
        .unwrap();

    store.remove_epic_by_id(doomed).unwrap();

    assert!(store.epic_by_id(doomed).is_err());
    assert!(store.subtasks_of_epic(doomed).is_empty());
    let remaining: Vec<_> = store.all_subtasks().iter().map(Subtask::id).collect();
    assert_eq!(remaining, vec![survivor]);
}

#[test]
fn removing_a_subtask_unlinks_only_that_child() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("e", ""));
    let first = store
        .create_subtask(Subtask::new("first", "", Status::New, epic))
        .unwrap();
    let second = store
        .create_subtask(Subtask::new("second", "", Status::New, epic))
        .unwrap();

    store.remove_subtask_by_id(first).unwrap();

    assert_eq!(store.epic_by_id(epic).unwrap().subtask_ids, vec![second]);
    assert!(store.subtask_by_id(second).is_ok());
}

#[test]
fn clear_all_subtasks_resets_every_epic() {
    let mut store = TaskStore::new();
    let first = store.create_epic(Epic::new("first", ""));
    let second = store.create_epic(Epic::new("second", ""));

    let child = store
        .create_subtask(Subtask::new("a", "", Status::New, first))
        .unwrap();
    store
        .create_subtask(Subtask::new("b", "", Status::New, second))
        .unwrap();
    store
        .update_subtask(subtask_update(child, Status::Done, first))
        .unwrap();

    store.clear_all_subtasks();

    assert!(store.all_subtasks().is_empty());
    for epic in store.all_epics() {
        assert_eq!(epic.status(), Status::New);
        assert!(epic.subtask_ids.is_empty());
    }
    assert_eq!(store.all_epics().len(), 2);
}

#[test]
fn clear_all_epics_empties_both_collections() {
    let mut store = TaskStore::new();
    let epic = store.create_epic(Epic::new("e", ""));
    store
        .create_subtask(Subtask::new("s", "", Status::New, epic))
        .unwrap();
    store.create_task(taskboard::model::Task::new("t", "", Status::New));

    store.clear_all_epics();

    assert!(store.all_epics().is_empty());
    assert!(store.all_subtasks().is_empty());
    assert_eq!(store.all_tasks().len(), 1);
}
