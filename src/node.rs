//! Declarative input: what a render pass produces and the [`Instantiator`](`crate::Instantiator`) consumes.

use crate::component::InternalComponent;
use core::{
	any::Any,
	fmt::{self, Debug, Display, Formatter},
};
use std::rc::Rc;

/// The dynamic kind of a value, named as JavaScript's `typeof` would name it (except for `null`).
///
/// Used in diagnostics for values that can't be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	Undefined,
	Null,
	Boolean,
	Number,
	String,
	Object,
	Function,
	Symbol,
}
impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ValueKind::Undefined => "undefined",
			ValueKind::Null => "null",
			ValueKind::Boolean => "boolean",
			ValueKind::Number => "number",
			ValueKind::String => "string",
			ValueKind::Object => "object",
			ValueKind::Function => "function",
			ValueKind::Symbol => "symbol",
		})
	}
}

/// Content of a text component.
///
/// Equality is value equality per variant, so a string never equals a number and `NaN` never equals itself.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
	String(Rc<str>),
	Number(f64),
}
impl TextContent {
	#[must_use]
	pub fn kind(&self) -> ValueKind {
		match self {
			TextContent::String(_) => ValueKind::String,
			TextContent::Number(_) => ValueKind::Number,
		}
	}
}

/// Stringifies the way JavaScript's `'' + value` does.
impl Display for TextContent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			TextContent::String(ref string) => f.write_str(string),
			TextContent::Number(number) if number.is_nan() => f.write_str("NaN"),
			TextContent::Number(number) if number.is_infinite() => f.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" }),
			TextContent::Number(number) if number == 0.0 => f.write_str("0"),
			TextContent::Number(number) if number.abs() >= 1e21 || number.abs() < 1e-6 => {
				let exponential = format!("{:e}", number);
				match exponential.split_once('e') {
					Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{}e+{}", mantissa, exponent),
					_ => f.write_str(&exponential),
				}
			}
			TextContent::Number(number) => write!(f, "{}", number),
		}
	}
}

impl From<&str> for TextContent {
	fn from(string: &str) -> Self {
		Self::String(string.into())
	}
}
impl From<String> for TextContent {
	fn from(string: String) -> Self {
		Self::String(string.into())
	}
}
impl From<Rc<str>> for TextContent {
	fn from(string: Rc<str>) -> Self {
		Self::String(string)
	}
}
impl From<f64> for TextContent {
	fn from(number: f64) -> Self {
		Self::Number(number)
	}
}
impl From<i32> for TextContent {
	fn from(number: i32) -> Self {
		Self::Number(number.into())
	}
}
impl From<u32> for TextContent {
	fn from(number: u32) -> Self {
		Self::Number(number.into())
	}
}

/// A user-defined or backend-provided component type, i.e. anything an element can have as `type` that isn't a tag name.
pub trait ComponentType: Debug {
	/// Used in diagnostics.
	fn display_name(&self) -> Option<&str> {
		None
	}

	/// Types that implement the internal instance contract themselves (like alternative renderer backends sharing the reconciler) construct their instance here.
	///
	/// Returning [`None`] (the default) marks a composite component type.
	fn construct_internal(&self, _element: &Element) -> Option<Box<dyn InternalComponent>> {
		None
	}
}

#[derive(Debug, Clone)]
pub enum ElementType {
	/// A built-in host element, by tag name.
	Tag(Rc<str>),
	Component(Rc<dyn ComponentType>),
	/// Any other value, as found in trees coming from untyped sources.
	/// Elements of this type can't be instantiated.
	Other(ValueKind),
}
impl ElementType {
	#[must_use]
	pub fn kind(&self) -> ValueKind {
		match self {
			ElementType::Tag(_) => ValueKind::String,
			ElementType::Component(_) => ValueKind::Function,
			ElementType::Other(kind) => *kind,
		}
	}
}
impl From<&str> for ElementType {
	fn from(tag: &str) -> Self {
		Self::Tag(tag.into())
	}
}
impl From<Rc<dyn ComponentType>> for ElementType {
	fn from(component_type: Rc<dyn ComponentType>) -> Self {
		Self::Component(component_type)
	}
}

#[derive(Clone)]
pub struct Element {
	pub r#type: ElementType,
	pub key: Option<Rc<str>>,
	/// Opaque to the reconciler core. Interpreted by native host and composite components.
	pub props: Rc<dyn Any>,
	/// Name of the component whose render method declared this element, if known.
	pub owner: Option<Rc<str>>,
}
impl Element {
	#[must_use]
	pub fn new(r#type: impl Into<ElementType>) -> Self {
		Self {
			r#type: r#type.into(),
			key: None,
			props: Rc::new(()),
			owner: None,
		}
	}

	#[must_use]
	pub fn with_key(self, key: impl Into<Rc<str>>) -> Self {
		Self { key: Some(key.into()), ..self }
	}

	#[must_use]
	pub fn with_props(self, props: Rc<dyn Any>) -> Self {
		Self { props, ..self }
	}

	#[must_use]
	pub fn with_owner(self, owner: impl Into<Rc<str>>) -> Self {
		Self { owner: Some(owner.into()), ..self }
	}
}
impl Debug for Element {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("type", &self.r#type)
			.field("key", &self.key)
			.field("owner", &self.owner)
			.finish_non_exhaustive()
	}
}

/// A declarative node.
#[derive(Debug, Clone)]
pub enum Node {
	Undefined,
	Null,
	Bool(bool),
	Text(TextContent),
	Element(Rc<Element>),
}
impl Node {
	#[must_use]
	pub fn kind(&self) -> ValueKind {
		match self {
			Node::Undefined => ValueKind::Undefined,
			Node::Null => ValueKind::Null,
			Node::Bool(_) => ValueKind::Boolean,
			Node::Text(text) => text.kind(),
			Node::Element(_) => ValueKind::Object,
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(Rc::new(element))
	}
}
impl From<bool> for Node {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<TextContent> for Node {
	fn from(text: TextContent) -> Self {
		Self::Text(text)
	}
}
impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Self::Text(text.into())
	}
}
impl From<String> for Node {
	fn from(text: String) -> Self {
		Self::Text(text.into())
	}
}
impl From<f64> for Node {
	fn from(text: f64) -> Self {
		Self::Text(text.into())
	}
}
impl From<i32> for Node {
	fn from(text: i32) -> Self {
		Self::Text(text.into())
	}
}
impl From<u32> for Node {
	fn from(text: u32) -> Self {
		Self::Text(text.into())
	}
}
impl<T: Into<Node>> From<Option<T>> for Node {
	fn from(node: Option<T>) -> Self {
		node.map_or(Self::Null, Into::into)
	}
}
