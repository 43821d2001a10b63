//! Both containers emit the same debug events with the same fields.

use std::io;
use std::sync::{Arc, Mutex};

use dynarray_buffer::Array;
use dynarray_test_utils::u32_array;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured<F: FnOnce()>(run: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn line_with<'a>(log: &'a str, message: &str) -> &'a str {
    log.lines()
        .find(|line| line.contains(message))
        .unwrap_or_else(|| panic!("no `{message}` event in:\n{log}"))
}

#[test]
fn byte_array_events() {
    let log = captured(|| {
        let mut array = u32_array(&(0..17).collect::<Vec<_>>());
        array.resize(3).unwrap();
        array.try_clone().unwrap();
    });

    let grow = line_with(&log, "growing byte array");
    assert!(grow.contains("from=16") && grow.contains("to=32") && grow.contains("width=4"));
    let resize = line_with(&log, "resizing byte array");
    assert!(resize.contains("capacity=16") && resize.contains("len=3"));
    let copy = line_with(&log, "copied byte array");
    assert!(copy.contains("len=3") && copy.contains("width=4"));
}

#[test]
fn typed_array_events() {
    let log = captured(|| {
        let mut array: Array<u32> = Array::new().unwrap();
        for v in 0..17u32 {
            array.create(v, v as usize).unwrap();
        }
        array.resize(3).unwrap();
        array.try_clone().unwrap();
    });

    let grow = line_with(&log, "growing typed array");
    assert!(grow.contains("from=16") && grow.contains("to=32") && grow.contains("width=4"));
    let resize = line_with(&log, "resizing typed array");
    assert!(resize.contains("capacity=16") && resize.contains("len=3"));
    let copy = line_with(&log, "copied typed array");
    assert!(copy.contains("len=3") && copy.contains("width=4"));
}
