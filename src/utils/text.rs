// src/utils/text.rs

const CANVAS: &str = "The code is but a canvas to our imagination.";
const CANVAS_ATTRIBUTION: &str = "\n\t- Adapted from Henry David Thoreau";

const ZEN: &str = "\
Beautiful is better than ugly.
Explicit is better than implicit.
Simple is better than complex.
Complex is better than complicated.
Flat is better than nested.
Sparse is better than dense.
Readability counts.
Special cases aren't special enough to break the rules.
Although practicality beats purity.
Errors should never pass silently.
Unless explicitly silenced.
In the face of ambiguity, refuse the temptation to guess.
There should be one-- and preferably only one --obvious way to do it.
Although that way may not be obvious at first unless you're Dutch.
Now is better than never.
Although never is often better than *right* now.
If the implementation is hard to explain, it's a bad idea.
If the implementation is easy to explain, it may be a good idea.
Namespaces are one honking great idea -- let's do more of those!";
const ZEN_ATTRIBUTION: &str = "\n\tTim Peters";

/// Canvas quote, optionally followed by who it is adapted from.
pub fn canvas(with_attribution: bool) -> String {
    quote(CANVAS, CANVAS_ATTRIBUTION, with_attribution)
}

pub fn zen(with_attribution: bool) -> String {
    quote(ZEN, ZEN_ATTRIBUTION, with_attribution)
}

fn quote(text: &str, attribution: &str, with_attribution: bool) -> String {
    let mut out = text.to_string();
    if with_attribution {
        out.push_str(attribution);
    }
    out
}
