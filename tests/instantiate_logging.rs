#![cfg(not(feature = "dangerous-logging"))]

use core::fmt::Debug;
use reconciler_dom::{CompositeComponentFactory, Element, InstanceKind, Instantiator, InternalComponent, NativeComponentFactory, Node};
use std::{
	rc::Rc,
	sync::{Arc, Mutex},
};
use tracing::{
	field::{Field, Visit},
	span::{Attributes, Id, Record},
	Event, Metadata, Subscriber,
};

/// Collects every recorded span and event field as `name=value`.
#[derive(Debug, Default, Clone)]
struct FieldRecorder {
	fields: Arc<Mutex<Vec<String>>>,
}
impl Visit for FieldRecorder {
	fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
		self.fields.lock().unwrap().push(format!("{}={:?}", field.name(), value));
	}
}
impl Subscriber for FieldRecorder {
	fn enabled(&self, _: &Metadata<'_>) -> bool {
		true
	}

	fn new_span(&self, span: &Attributes<'_>) -> Id {
		span.record(&mut self.clone());
		Id::from_u64(1)
	}

	fn record(&self, _: &Id, values: &Record<'_>) {
		values.record(&mut self.clone());
	}

	fn record_follows_from(&self, _: &Id, _: &Id) {}

	fn event(&self, event: &Event<'_>) {
		event.record(&mut self.clone());
	}

	fn enter(&self, _: &Id) {}

	fn exit(&self, _: &Id) {}
}

#[derive(Debug)]
struct NoHostComponents;
impl NativeComponentFactory for NoHostComponents {
	fn create_internal_component(&self, element: &Rc<Element>) -> Box<dyn InternalComponent> {
		panic!("Unexpected host element {:?}", element)
	}
}
impl CompositeComponentFactory for NoHostComponents {
	fn create_composite_component(&self, element: &Rc<Element>, _: Instantiator) -> Box<dyn InternalComponent> {
		panic!("Unexpected composite element {:?}", element)
	}
}

#[test]
fn text_content_stays_out_of_logs() {
	let factory = Rc::new(NoHostComponents);
	let instantiator = Instantiator::new(factory.clone(), factory);
	let recorder = FieldRecorder::default();

	let instance = tracing::subscriber::with_default(recorder.clone(), || instantiator.instantiate(&Node::from("secret personal text")).unwrap());
	assert!(matches!(instance.kind(), InstanceKind::Text(_)));

	let fields = recorder.fields.lock().unwrap();
	assert!(fields.iter().any(|field| field == "kind=string"), "{:?}", *fields);
	assert!(fields.iter().all(|field| !field.contains("secret")), "{:?}", *fields);
}
