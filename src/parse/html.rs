use std::io::Cursor;

use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::SlideResult;
use crate::family::ElementKind;
use crate::node::{Document, Element, Node};

/// Deepest element nesting kept by [`parse_html`], counted from `<html>`.
///
/// Elements below this depth are flattened into a text node of their
/// nearest kept ancestor.
pub const MAX_NESTING: usize = 512;

/// Parse an HTML string into a [`Document`] rooted at `<body>`
///
/// Comments, doctypes, processing instructions and `<template>` contents
/// are dropped. Falls back to the `<html>` element when the tree has no
/// body (which the HTML5 tree builder always synthesizes for documents).
/// Nesting is capped at [`MAX_NESTING`].
pub fn parse_html(markup: &str) -> SlideResult<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut reader = Cursor::new(markup.as_bytes());
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut reader)?;

    let html = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|h| matches!(&h.data, NodeData::Element { name, .. } if &*name.local == "html"))
        .cloned();

    let Some(mut html) = html.as_ref().and_then(convert_element) else {
        return Ok(Document::new(Element::new("body")));
    };

    let body_idx = html
        .children
        .iter()
        .position(|n| n.as_element().is_some_and(|e| e.tag == "body"));
    let root = match body_idx {
        Some(idx) => match html.children.remove(idx) {
            Node::Element(body) => *body,
            Node::Text(_) => html,
        },
        None => html,
    };
    Ok(Document::new(root))
}

/// An element under construction and the index of its next child
struct Frame {
    handle: Handle,
    elem: Element,
    next: usize,
}

impl Frame {
    fn open(handle: &Handle) -> Option<Self> {
        let NodeData::Element { name, attrs, .. } = &handle.data else {
            return None;
        };
        let mut elem = Element::new(&*name.local);
        for attr in attrs.borrow().iter() {
            elem.attrs
                .push((attr.name.local.to_string(), attr.value.to_string()));
        }
        Some(Self {
            handle: handle.clone(),
            elem,
            next: 0,
        })
    }
}

/// Convert an element handle and its subtree without recursion
fn convert_element(root: &Handle) -> Option<Element> {
    let mut stack = vec![Frame::open(root)?];
    loop {
        let depth = stack.len();
        let top = stack.last_mut()?;
        // Template contents live outside `children` and are never visited
        let child = top.handle.children.borrow().get(top.next).cloned();
        top.next += 1;

        let Some(child) = child else {
            let done = stack.pop()?.elem;
            match stack.last_mut() {
                Some(parent) => parent.elem.push_elem(done),
                None => return Some(done),
            }
            continue;
        };

        match &child.data {
            NodeData::Element { .. } if depth >= MAX_NESTING => {
                let text = flatten_text(&child);
                if !text.is_empty() {
                    top.elem.push_text(text);
                }
            }
            NodeData::Element { .. } => {
                if let Some(frame) = Frame::open(&child) {
                    stack.push(frame);
                }
            }
            NodeData::Text { contents } => top.elem.push_text(contents.borrow().to_string()),
            _ => {}
        }
    }
}

/// Text of a subtree in document order, skipping ignored elements
fn flatten_text(root: &Handle) -> String {
    let mut text = String::new();
    let mut pending = vec![root.clone()];
    while let Some(handle) = pending.pop() {
        match &handle.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                if ElementKind::identify(&name.local) == ElementKind::Ignored {
                    continue;
                }
                if &*name.local == "br" {
                    text.push(' ');
                }
                pending.extend(handle.children.borrow().iter().rev().cloned());
            }
            _ => {}
        }
    }
    text
}
