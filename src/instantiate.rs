//! Turns declarative [`Node`]s into mountable instances.

use crate::{
	component::{Capabilities, Context, InternalComponent, MountImage, NativeNode},
	component_tree::InstanceId,
	container::{ContainerInfo, Transaction},
	empty::EmptyComponent,
	error::DeclarationAddendum,
	node::{Element, ElementType, Node, TextContent},
	text::TextComponent,
	Error, Result,
};
use core::fmt::Debug;
use std::rc::Rc;
use tracing::{error, instrument, level_filters::STATIC_MAX_LEVEL, trace, warn, Level};

/// Creates instances for built-in host elements and text.
pub trait NativeComponentFactory: Debug {
	fn create_internal_component(&self, element: &Rc<Element>) -> Box<dyn InternalComponent>;

	fn create_instance_for_text(&self, text: TextContent) -> TextComponent {
		TextComponent::new(text)
	}
}

/// Creates instances for user-defined components.
pub trait CompositeComponentFactory: Debug {
	/// `instantiator` is what the created instance should use to instantiate whatever it renders.
	fn create_composite_component(&self, element: &Rc<Element>, instantiator: Instantiator) -> Box<dyn InternalComponent>;
}

/// The instantiation function, together with the factories it depends on.
///
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Instantiator {
	native: Rc<dyn NativeComponentFactory>,
	composite: Rc<dyn CompositeComponentFactory>,
}

impl Instantiator {
	#[must_use]
	pub fn new(native: Rc<dyn NativeComponentFactory>, composite: Rc<dyn CompositeComponentFactory>) -> Self {
		Self { native, composite }
	}

	/// Classifies `node` and constructs the matching instance.
	///
	/// # Errors
	///
	/// [`Error::InvalidElementType`] for elements whose type is neither a tag name nor a component type,
	/// [`Error::InvalidNode`] for `undefined` and `true`.
	#[instrument(skip(self, node), fields(kind = %node.kind()))]
	pub fn instantiate(&self, node: &Node) -> Result<Instance> {
		if cfg!(feature = "dangerous-logging") {
			trace!(?node);
		}

		let kind = match node {
			Node::Null | Node::Bool(false) => InstanceKind::Empty(EmptyComponent::new()),

			Node::Element(element) => match &element.r#type {
				ElementType::Tag(tag) => {
					trace!(%tag, "Native host component.");
					InstanceKind::NativeHost(self.native.create_internal_component(element))
				}
				ElementType::Component(component_type) => match component_type.construct_internal(element) {
					Some(instance) => {
						trace!(?component_type, "Internal component type.");
						InstanceKind::InternalTyped(instance)
					}
					None => {
						trace!(?component_type, "Composite component.");
						InstanceKind::Composite(self.composite.create_composite_component(element, self.clone()))
					}
				},
				ElementType::Other(found) => {
					let error = Error::InvalidElementType {
						found: *found,
						owner: DeclarationAddendum(element.owner.clone()),
					};
					error!("{}", error);
					return Err(error);
				}
			},

			Node::Text(text) => InstanceKind::Text(self.native.create_instance_for_text(text.clone())),

			Node::Undefined | Node::Bool(true) => {
				let error = Error::InvalidNode { found: node.kind() };
				error!("{}", error);
				return Err(error);
			}
		};

		let instance = Instance {
			kind,
			mount_index: 0,
			mount_image: None,
		};

		if cfg!(debug_assertions) && STATIC_MAX_LEVEL >= Level::WARN {
			let missing = Capabilities::all().difference(instance.capabilities());
			if !missing.is_empty() {
				warn!("Only components implementing the full instance contract can be mounted. {:?} is missing {:?}.", instance.kind, missing);
			}
		}

		Ok(instance)
	}
}

/// The closed set of things the reconciler can mount.
#[derive(Debug)]
pub enum InstanceKind {
	Empty(EmptyComponent),
	NativeHost(Box<dyn InternalComponent>),
	/// Constructed by a component type implementing the instance contract itself.
	InternalTyped(Box<dyn InternalComponent>),
	Composite(Box<dyn InternalComponent>),
	Text(TextComponent),
}
impl InstanceKind {
	#[must_use]
	pub fn as_internal(&self) -> &dyn InternalComponent {
		match self {
			InstanceKind::Empty(empty) => empty,
			InstanceKind::NativeHost(instance) | InstanceKind::InternalTyped(instance) | InstanceKind::Composite(instance) => instance.as_ref(),
			InstanceKind::Text(text) => text,
		}
	}

	pub fn as_internal_mut(&mut self) -> &mut dyn InternalComponent {
		match self {
			InstanceKind::Empty(empty) => empty,
			InstanceKind::NativeHost(instance) | InstanceKind::InternalTyped(instance) | InstanceKind::Composite(instance) => instance.as_mut(),
			InstanceKind::Text(text) => text,
		}
	}
}

/// A mountable instance, plus the bookkeeping the child diffing algorithm keeps on it.
#[derive(Debug)]
pub struct Instance {
	kind: InstanceKind,
	mount_index: usize,
	mount_image: Option<MountImage>,
}
impl Instance {
	#[must_use]
	pub fn kind(&self) -> &InstanceKind {
		&self.kind
	}

	pub fn kind_mut(&mut self) -> &mut InstanceKind {
		&mut self.kind
	}

	#[must_use]
	pub fn into_kind(self) -> InstanceKind {
		self.kind
	}

	/// Position among siblings.
	#[must_use]
	pub fn mount_index(&self) -> usize {
		self.mount_index
	}

	pub fn set_mount_index(&mut self, mount_index: usize) {
		self.mount_index = mount_index;
	}

	#[must_use]
	pub fn mount_image(&self) -> Option<&MountImage> {
		self.mount_image.as_ref()
	}

	pub fn set_mount_image(&mut self, mount_image: MountImage) {
		self.mount_image = Some(mount_image);
	}

	pub fn take_mount_image(&mut self) -> Option<MountImage> {
		self.mount_image.take()
	}
}

impl InternalComponent for Instance {
	fn mount_component(&mut self, transaction: &Transaction, native_parent: Option<InstanceId>, container: &mut ContainerInfo, context: &Context) -> Result<MountImage> {
		self.kind.as_internal_mut().mount_component(transaction, native_parent, container, context)
	}

	fn receive_component(&mut self, next: &Node, transaction: &Transaction, context: &Context) -> Result<()> {
		self.kind.as_internal_mut().receive_component(next, transaction, context)
	}

	fn get_native_node(&mut self) -> Result<NativeNode> {
		self.kind.as_internal_mut().get_native_node()
	}

	fn unmount_component(&mut self) {
		self.kind.as_internal_mut().unmount_component();
	}

	fn capabilities(&self) -> Capabilities {
		self.kind.as_internal().capabilities()
	}
}
