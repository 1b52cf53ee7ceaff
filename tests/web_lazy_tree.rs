#![cfg(target_arch = "wasm32")]

use reconciler_dom::{
	lazy_tree::{insert_tree_before, replace_child_with_tree},
	Error, InsertionMode, LazyTree,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Node;

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::{document, fresh_container};

const MODES: [InsertionMode; 2] = [InsertionMode::Immediate, InsertionMode::Lazy];

fn span_with_text(mode: InsertionMode, text: &str) -> LazyTree {
	let mut tree = LazyTree::new(document().create_element("span").unwrap());
	tree.queue_text(mode, text);
	tree
}

#[wasm_bindgen_test]
fn children_keep_queue_order() {
	for &mode in &MODES {
		let container = fresh_container();
		let mut list = LazyTree::new(document().create_element("ul").unwrap());
		for text in &["a", "b", "c"] {
			list.queue_child(mode, span_with_text(mode, text)).unwrap();
		}

		insert_tree_before(mode, container.as_ref(), list, None).unwrap();
		assert_eq!(container.inner_html(), "<ul><span>a</span><span>b</span><span>c</span></ul>", "{:?}", mode);
	}
}

#[wasm_bindgen_test]
fn lazy_mode_defers_until_insertion() {
	let mut list = LazyTree::new(document().create_element("ul").unwrap());
	list.queue_child(InsertionMode::Lazy, span_with_text(InsertionMode::Lazy, "a")).unwrap();
	list.queue_child(InsertionMode::Lazy, span_with_text(InsertionMode::Lazy, "b")).unwrap();

	assert_eq!(list.node().child_nodes().length(), 0);
	assert_eq!(list.children().len(), 2);
	assert_eq!(list.children()[0].text(), Some("a"));
	assert_eq!(list.children()[0].node().text_content(), Some(String::new()));
}

#[wasm_bindgen_test]
fn immediate_mode_attaches_right_away() {
	let mut list = LazyTree::new(document().create_element("ul").unwrap());
	list.queue_child(InsertionMode::Immediate, span_with_text(InsertionMode::Immediate, "a")).unwrap();

	assert_eq!(list.node().child_nodes().length(), 1);
	assert!(list.children().is_empty());
	assert_eq!(list.node().text_content().as_deref(), Some("a"));
}

#[wasm_bindgen_test]
fn fragment_is_populated_before_insertion() {
	for &mode in &MODES {
		let container = fresh_container();
		let document = document();
		let fragment: Node = document.create_document_fragment().into();
		let mut tree = LazyTree::new(fragment.clone());
		tree.queue_child(mode, LazyTree::new(document.create_comment("start"))).unwrap();
		tree.queue_child(mode, LazyTree::new(document.create_text_node("middle"))).unwrap();
		tree.queue_child(mode, LazyTree::new(document.create_comment("end"))).unwrap();

		insert_tree_before(mode, container.as_ref(), tree, None).unwrap();

		assert_eq!(fragment.child_nodes().length(), 0, "{:?}", mode);
		assert_eq!(container.child_nodes().length(), 3, "{:?}", mode);
		assert_eq!(container.inner_html(), "<!--start-->middle<!--end-->", "{:?}", mode);
	}
}

#[wasm_bindgen_test]
fn nested_fragment_is_flushed_into_its_parent() {
	for &mode in &MODES {
		let container = fresh_container();
		let document = document();
		let fragment: Node = document.create_document_fragment().into();
		let mut delimited = LazyTree::new(fragment.clone());
		delimited.queue_child(mode, LazyTree::new(document.create_comment("start"))).unwrap();
		delimited.queue_child(mode, LazyTree::new(document.create_text_node("middle"))).unwrap();
		delimited.queue_child(mode, LazyTree::new(document.create_comment("end"))).unwrap();

		let mut paragraph = LazyTree::new(document.create_element("p").unwrap());
		paragraph.queue_child(mode, span_with_text(mode, "before")).unwrap();
		paragraph.queue_child(mode, delimited).unwrap();
		paragraph.queue_child(mode, span_with_text(mode, "after")).unwrap();
		assert_eq!(paragraph.children().len(), if mode == InsertionMode::Lazy { 3 } else { 0 }, "{:?}", mode);

		insert_tree_before(mode, container.as_ref(), paragraph, None).unwrap();

		assert_eq!(fragment.child_nodes().length(), 0, "{:?}", mode);
		assert_eq!(
			container.inner_html(),
			"<p><span>before</span><!--start-->middle<!--end--><span>after</span></p>",
			"{:?}",
			mode
		);
	}
}

#[wasm_bindgen_test]
fn inserts_before_reference_node() {
	for &mode in &MODES {
		let container = fresh_container();
		container.set_inner_html("<i></i>");
		let reference = container.first_child().unwrap();

		insert_tree_before(mode, container.as_ref(), span_with_text(mode, "first"), Some(&reference)).unwrap();
		assert_eq!(container.inner_html(), "<span>first</span><i></i>", "{:?}", mode);
	}
}

#[wasm_bindgen_test]
fn queued_html_is_flushed() {
	for &mode in &MODES {
		let container = fresh_container();
		let mut tree = LazyTree::new(document().create_element("p").unwrap());
		tree.queue_html(mode, "<b>bold</b>").unwrap();
		assert_eq!(tree.html().is_some(), mode == InsertionMode::Lazy);

		insert_tree_before(mode, container.as_ref(), tree, None).unwrap();
		assert_eq!(container.inner_html(), "<p><b>bold</b></p>", "{:?}", mode);
	}
}

#[wasm_bindgen_test]
fn html_needs_an_element() {
	let mut tree = LazyTree::new(document().create_comment("not an element"));
	assert!(matches!(tree.queue_html(InsertionMode::Lazy, "<b></b>"), Err(Error::NotAnElement)));
}

#[wasm_bindgen_test]
fn replaces_child_with_tree() {
	for &mode in &MODES {
		let container = fresh_container();
		container.set_inner_html("<i>old</i><u></u>");
		let old = container.first_child().unwrap();

		let mut list = LazyTree::new(document().create_element("ol").unwrap());
		list.queue_child(mode, span_with_text(mode, "new")).unwrap();
		replace_child_with_tree(mode, &old, list).unwrap();

		assert_eq!(container.inner_html(), "<ol><span>new</span></ol><u></u>", "{:?}", mode);
		assert!(old.parent_node().is_none());
	}
}

#[wasm_bindgen_test]
fn replacing_a_detached_node_fails() {
	let detached: Node = document().create_element("i").unwrap().into();
	let result = replace_child_with_tree(InsertionMode::Immediate, &detached, span_with_text(InsertionMode::Immediate, "x"));
	assert!(matches!(result, Err(Error::Detached)));
}

#[wasm_bindgen_test]
fn detection_is_stable() {
	assert_eq!(InsertionMode::current(), InsertionMode::current());
	assert_eq!(InsertionMode::current(), InsertionMode::detect());
}
