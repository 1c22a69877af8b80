use std::cell::RefCell;
use std::rc::Weak;

use assert_that::Assertions;

#[derive(Assertions)]
struct Node {
    label: String,
    visible: bool,
    #[assertions(skip)]
    parent: RefCell<Option<Weak<Node>>>,
}

fn main() {
    let node = Node {
        label: "root".to_string(),
        visible: true,
        parent: RefCell::new(None),
    };

    NodeAssert::assert_that(&node)
        .has_label("root")
        .is_visible();
    assert!(node.parent.borrow().is_none());
}
