use super::*;

#[test]
fn start_of_file_is_origin() {
    let loc = SourceLocation::start_of(Arc::from("meow.meow"));
    assert_eq!(loc.file(), "meow.meow");
    assert_eq!(loc.line(), 0);
    assert_eq!(loc.column(), 0);
}

#[test]
fn display_is_file_line_column() {
    let loc = SourceLocation::new(Arc::from("cat.meow"), 2, 7);
    assert_eq!(loc.to_string(), "cat.meow:2:7");
    assert_eq!(format!("{loc:?}"), "cat.meow:2:7");
}

#[test]
fn with_position_shares_file_name() {
    let start = SourceLocation::start_of(Arc::from("meow.meow"));
    let moved = start.with_position(1, 3);
    assert!(Arc::ptr_eq(start.file_name(), moved.file_name()));
    assert_eq!((moved.line(), moved.column()), (1, 3));
}

#[test]
fn clone_shares_file_name() {
    let loc = SourceLocation::new(Arc::from("meow.meow"), 1, 1);
    let copy = loc.clone();
    assert!(Arc::ptr_eq(loc.file_name(), copy.file_name()));
    assert_eq!(loc, copy);
}

#[test]
fn equality_compares_file_contents() {
    let a = SourceLocation::new(Arc::from("a.meow"), 1, 1);
    let b = SourceLocation::new(Arc::from("a.meow"), 1, 1);
    let c = SourceLocation::new(Arc::from("b.meow"), 1, 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn locations_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SourceLocation>();
}
