use serde_json::{Value, json};

const VOCABULARY: [&str; 10] = [
    "river", "stone", "lamp", "orchard", "weather", "copper", "window", "thread", "meadow",
    "signal",
];

/// A paragraph of `words` words drawn from a fixed vocabulary.
pub fn paragraph(words: usize, seed: usize) -> String {
    (0..words)
        .map(|i| VOCABULARY[(seed + i * 7) % VOCABULARY.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// `count` paragraphs of mixed length as a JSON content array.
pub fn manuscript(count: usize) -> Value {
    let blocks: Vec<Value> = (0..count)
        .map(|i| {
            let words = if i % 9 == 4 { 1200 } else { 15 + (i * 11) % 80 };
            json!(paragraph(words, i))
        })
        .collect();
    Value::Array(blocks)
}

/// A block whose first child is a nested element.
pub fn nested_block(inner: &str, tail: &str) -> Value {
    json!({ "children": [ { "children": [inner] }, tail ] })
}

/// Page options with explicit pixel dimensions and no margin.
pub fn small_page(height_px: u32) -> Value {
    json!({
        "width": "400px",
        "height": format!("{}px", height_px),
        "margin": "0"
    })
}
