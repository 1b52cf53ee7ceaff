use crate::{
	container::{ContainerInfo, Transaction},
	lazy_tree::LazyTree,
	node::Node,
	InstanceId, Result,
};
use bitflags::bitflags;
use core::{any::Any, fmt::Debug};
use hashbrown::HashMap;
use std::rc::Rc;

/// Legacy context, passed down through mounts. Opaque to this crate.
pub type Context = HashMap<Rc<str>, Rc<dyn Any>>;

bitflags! {
	/// The operations an internal instance supports.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Capabilities: u8 {
		const MOUNT = 0b0001;
		const RECEIVE = 0b0010;
		const NATIVE_NODE = 0b0100;
		const UNMOUNT = 0b1000;
	}
}

/// What mounting produced.
#[derive(Debug)]
pub enum MountImage {
	/// DOM nodes that still have to be inserted, see [`insert_tree_before`](`crate::lazy_tree::insert_tree_before`).
	Tree(LazyTree),
	/// HTML source.
	Markup(String),
}
impl MountImage {
	#[must_use]
	pub fn into_tree(self) -> Option<LazyTree> {
		match self {
			MountImage::Tree(tree) => Some(tree),
			MountImage::Markup(_) => None,
		}
	}

	#[must_use]
	pub fn as_markup(&self) -> Option<&str> {
		match self {
			MountImage::Markup(markup) => Some(markup),
			MountImage::Tree(_) => None,
		}
	}
}

/// The DOM node(s) an instance is rendered as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeNode {
	Single(web_sys::Node),
	/// Opening and closing marker, with the instance's content strictly between them.
	Delimited([web_sys::Node; 2]),
}

/// The contract between the reconciler and everything it mounts.
///
/// The reconciler drives instances only through this trait and doesn't know which kind of component it is dealing with.
pub trait InternalComponent: Debug {
	/// # Errors
	///
	/// Fatal conditions only. The DOM may be left half-built.
	fn mount_component(&mut self, transaction: &Transaction, native_parent: Option<InstanceId>, container: &mut ContainerInfo, context: &Context) -> Result<MountImage>;

	/// # Errors
	///
	/// Fatal conditions only.
	fn receive_component(&mut self, next: &Node, transaction: &Transaction, context: &Context) -> Result<()>;

	/// # Errors
	///
	/// Iff the native node can't be resolved.
	fn get_native_node(&mut self) -> Result<NativeNode>;

	fn unmount_component(&mut self);

	/// Which of the above are actually implemented.
	///
	/// Backends that only partially support the contract should say so here.
	/// This is checked (with a warning) in debug builds only.
	fn capabilities(&self) -> Capabilities {
		Capabilities::all()
	}
}
