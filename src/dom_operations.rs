//! Small DOM mutations shared by the tree builder and the text component.

use crate::{Error, Result};
use tracing::{instrument, trace};
use web_sys::Node;

/// Sets the text content of `node`.
///
/// If `node` has exactly one child and that child is a text node, its value is replaced instead,
/// which avoids creating a new text node.
pub fn set_text_content(node: &Node, text: &str) {
	if !text.is_empty() {
		if let Some(first_child) = node.first_child() {
			if node.last_child().map_or(false, |last_child| last_child.is_same_node(Some(&first_child))) && first_child.node_type() == Node::TEXT_NODE {
				trace!("Reusing sole text child.");
				return first_child.set_node_value(Some(text));
			}
		}
	}
	node.set_text_content(Some(text))
}

/// Removes all siblings strictly after `start_node` up to (excluding) `closing_comment`.
///
/// # Errors
///
/// Iff `closing_comment` is not a later sibling of `start_node`, [`Error::Detached`] is returned once the sibling chain runs out.
pub fn remove_delimited_text(parent_node: &Node, start_node: &Node, closing_comment: &Node) -> Result<()> {
	loop {
		let node = start_node.next_sibling().ok_or(Error::Detached)?;
		if node.is_same_node(Some(closing_comment)) {
			return Ok(());
		}
		parent_node.remove_child(&node).map_err(Error::Dom)?;
	}
}

/// Replaces everything strictly between `opening_comment` and `closing_comment` with a single text node containing `text`.
///
/// No text node is left behind if `text` is empty.
///
/// # Errors
///
/// [`Error::Detached`] if `opening_comment` has no parent, [`Error::Dom`] if a DOM call throws.
#[instrument(skip(text))]
pub fn replace_delimited_text(opening_comment: &Node, closing_comment: &Node, text: &str) -> Result<()> {
	let parent_node = opening_comment.parent_node().ok_or(Error::Detached)?;
	let node_after_comment = opening_comment.next_sibling().ok_or(Error::Detached)?;

	if node_after_comment.is_same_node(Some(closing_comment)) {
		if !text.is_empty() {
			let document = opening_comment.owner_document().ok_or(Error::MissingOwnerDocument)?;
			let text_node = document.create_text_node(text);
			parent_node.insert_before(text_node.as_ref(), Some(&node_after_comment)).map_err(Error::Dom)?;
		}
	} else if !text.is_empty() {
		set_text_content(&node_after_comment, text);
		remove_delimited_text(&parent_node, &node_after_comment, closing_comment)?;
	} else {
		remove_delimited_text(&parent_node, opening_comment, closing_comment)?;
	}
	Ok(())
}
