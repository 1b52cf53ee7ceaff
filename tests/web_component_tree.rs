#![cfg(target_arch = "wasm32")]

use reconciler_dom::{ComponentTree, InstanceId, NodeRegistry};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Node;

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::{document, init_logging};

#[wasm_bindgen_test]
fn maps_both_ways() {
	init_logging();
	let registry = ComponentTree::new();
	let instance = InstanceId::next();
	let node: Node = document().create_comment("anchor").into();

	registry.precache_node(instance, &node);
	assert_eq!(registry.len(), 1);
	assert!(registry.get_node_from_instance(instance).unwrap().is_same_node(Some(&node)));
	assert_eq!(registry.get_instance_from_node(&node), Some(instance));

	registry.uncache_node(instance);
	assert!(registry.is_empty());
	assert_eq!(registry.get_node_from_instance(instance), None);
	assert_eq!(registry.get_instance_from_node(&node), None);
}

#[wasm_bindgen_test]
fn registries_do_not_see_each_other() {
	init_logging();
	let (a, b) = (ComponentTree::new(), ComponentTree::new());
	let instance = InstanceId::next();
	let node: Node = document().create_comment("anchor").into();

	a.precache_node(instance, &node);
	assert_eq!(b.get_instance_from_node(&node), None);
}
