use super::*;

fn files(names: &[&str]) -> Vec<SelectedFile> {
    names.iter().map(|n| SelectedFile::new(*n, 1024.0)).collect()
}

#[test]
fn new_session_is_empty_and_closed() {
    let session = SiteSession::new();
    assert!(!session.chat_open());
    assert_eq!(session.upload_count(), 0);
    assert!(!session.is_ended());
}

#[test]
fn toggle_chat_flips_open_flag() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::ToggleChat);
    assert!(session.chat_open());
    session.apply(SessionAction::ToggleChat);
    assert!(!session.chat_open());
}

#[test]
fn selection_replaces_previous_files_for_that_input() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::FilesSelected {
        input_id: "studentDocs".into(),
        files: files(&["a.pdf", "b.pdf"]),
    });
    session.apply(SessionAction::FilesSelected {
        input_id: "studentDocs".into(),
        files: files(&["c.pdf"]),
    });
    assert_eq!(session.uploads("studentDocs"), files(&["c.pdf"]).as_slice());
    assert_eq!(session.upload_count(), 1);
}

#[test]
fn remove_only_touches_its_input() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::FilesSelected {
        input_id: "studentDocs".into(),
        files: files(&["a.pdf"]),
    });
    session.apply(SessionAction::FilesSelected {
        input_id: "parentDocs".into(),
        files: files(&["id.png"]),
    });
    session.apply(SessionAction::FileRemoved {
        input_id: "studentDocs".into(),
    });
    assert!(session.uploads("studentDocs").is_empty());
    assert_eq!(session.uploads("parentDocs").len(), 1);
}

#[test]
fn end_clears_state_and_freezes_session() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::ToggleChat);
    session.apply(SessionAction::FilesSelected {
        input_id: "studentDocs".into(),
        files: files(&["a.pdf"]),
    });
    session.apply(SessionAction::End);
    assert!(session.is_ended());
    assert!(!session.chat_open());
    assert_eq!(session.upload_count(), 0);

    session.apply(SessionAction::ToggleChat);
    assert!(!session.chat_open());
}

#[test]
fn reduce_leaves_previous_state_untouched() {
    let before = Rc::new(SiteSession::new());
    let after = before.clone().reduce(SessionAction::ToggleChat);
    assert!(!before.chat_open());
    assert!(after.chat_open());
}

#[test]
fn start_after_end_reopens_the_session() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::End);
    session.apply(SessionAction::Start);
    assert!(!session.is_ended());

    session.apply(SessionAction::ToggleChat);
    session.apply(SessionAction::FilesSelected {
        input_id: "studentDocs".into(),
        files: files(&["a.pdf"]),
    });
    assert!(session.chat_open());
    assert_eq!(session.upload_count(), 1);
}

#[test]
fn start_keeps_a_live_session_as_is() {
    let mut session = SiteSession::new();
    session.apply(SessionAction::ToggleChat);
    session.apply(SessionAction::Start);
    assert!(session.chat_open());
}
