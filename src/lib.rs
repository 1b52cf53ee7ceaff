#![doc(html_root_url = "https://docs.rs/reconciler-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod component;
pub mod component_tree;
pub mod container;
pub mod dom_operations;
pub mod empty;
mod error;
pub mod escape;
pub mod instantiate;
pub mod lazy_tree;
pub mod node;
pub mod text;

pub use component::{Capabilities, Context, InternalComponent, MountImage, NativeNode};
pub use component_tree::{ComponentTree, InstanceId, NodeRegistry};
pub use container::{ContainerInfo, DomIdCounter, RenderMode, Transaction};
pub use empty::EmptyComponent;
pub use error::{DeclarationAddendum, Error, Result};
pub use instantiate::{CompositeComponentFactory, Instance, InstanceKind, Instantiator, NativeComponentFactory};
pub use lazy_tree::{InsertionMode, LazyTree};
pub use node::{ComponentType, Element, ElementType, Node, TextContent, ValueKind};
pub use text::TextComponent;
