//! Mapping between internal instances and the DOM nodes they render to.

use core::{
	cell::RefCell,
	fmt::Debug,
	sync::atomic::{AtomicU64, Ordering},
};
use hashbrown::HashMap;
use js_sys::{Math, Reflect};
use tracing::{error, trace};
use wasm_bindgen::JsValue;
use web_sys::Node;

/// Identifies an internal instance for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);
impl InstanceId {
	#[must_use]
	pub fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(1);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}

	#[must_use]
	pub fn get(self) -> u64 {
		self.0
	}
}

/// Instance ↔ native node mapping.
///
/// Takes `&self`, as a registry is shared by every instance mounted into the same container.
pub trait NodeRegistry: Debug {
	fn precache_node(&self, instance: InstanceId, node: &Node);
	fn get_node_from_instance(&self, instance: InstanceId) -> Option<Node>;
	fn uncache_node(&self, instance: InstanceId);
}

/// The default [`NodeRegistry`].
///
/// The reverse mapping is stored as property on each cached DOM node, so it's freed along with the node.
#[derive(Debug)]
pub struct ComponentTree {
	internal_instance_key: JsValue,
	nodes: RefCell<HashMap<InstanceId, Node>>,
}
impl Default for ComponentTree {
	fn default() -> Self {
		Self::new()
	}
}
impl ComponentTree {
	#[must_use]
	pub fn new() -> Self {
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		let suffix = (Math::random() * f64::from(u32::MAX)) as u32;
		Self {
			internal_instance_key: JsValue::from_str(&format!("__reconcilerInternalInstance${:x}", suffix)),
			nodes: RefCell::default(),
		}
	}

	/// Finds the instance `node` was precached for.
	#[must_use]
	pub fn get_instance_from_node(&self, node: &Node) -> Option<InstanceId> {
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		let id = Reflect::get(node, &self.internal_instance_key).ok()?.as_f64()? as u64;
		Some(InstanceId(id))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.borrow().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.borrow().is_empty()
	}
}
impl NodeRegistry for ComponentTree {
	fn precache_node(&self, instance: InstanceId, node: &Node) {
		#[allow(clippy::cast_precision_loss)]
		let id = JsValue::from_f64(instance.0 as f64);
		if let Err(error) = Reflect::set(node, &self.internal_instance_key, &id) {
			error!("Failed to store back-reference on {:?}: {:?}", node, error);
		}
		if let Some(replaced) = self.nodes.borrow_mut().insert(instance, node.clone()) {
			trace!("Replaced cached node {:?} for {:?}.", replaced, instance);
		}
	}

	fn get_node_from_instance(&self, instance: InstanceId) -> Option<Node> {
		self.nodes.borrow().get(&instance).cloned()
	}

	fn uncache_node(&self, instance: InstanceId) {
		if let Some(node) = self.nodes.borrow_mut().remove(&instance) {
			if let Err(error) = Reflect::delete_property(&node, &self.internal_instance_key) {
				error!("Failed to remove back-reference from {:?}: {:?}", node, error);
			}
		}
	}
}
