#![expect(missing_docs)]

use core::fmt::Write;

use charref::{UnescapeOptions, Unescaper};

fn render(inputs: &[&str], in_attribute: bool) -> String {
    let mut unescaper = Unescaper::with_options(UnescapeOptions { in_attribute });
    let mut out = String::new();
    for input in inputs {
        let mut errors = Vec::new();
        let text = unescaper.unescape_with(input, |error, offset| {
            errors.push(format!("{offset}: {error}"));
        });
        writeln!(out, "{input:?} => {text:?} {errors:?}").unwrap();
    }
    out
}

#[test]
fn snapshot_text_content() {
    let inputs = [
        "Tom &amp; Jerry",
        "&copy 2025",
        "&notit;",
        "&#x110000;",
        "&#128;&#129;",
        "&bogus;",
    ];
    insta::assert_snapshot!(render(&inputs, false), @r##"
    "Tom &amp; Jerry" => "Tom & Jerry" []
    "&copy 2025" => "© 2025" ["0: character reference is not terminated by a semicolon"]
    "&notit;" => "¬it;" ["0: character reference is not terminated by a semicolon"]
    "&#x110000;" => "�" ["0: numeric character reference 0x110000 is outside the Unicode range"]
    "&#128;&#129;" => "€&#129;" ["0: numeric character reference to control character U+0080", "6: numeric character reference to control character U+0081"]
    "&bogus;" => "&bogus;" ["0: unknown named character reference"]
    "##);
}

#[test]
fn snapshot_attribute_values() {
    let inputs = ["?a=1&copy=2", "&lt;b&gt"];
    insta::assert_snapshot!(render(&inputs, true), @r##"
    "?a=1&copy=2" => "?a=1&copy=2" []
    "&lt;b&gt" => "<b>" ["5: character reference is not terminated by a semicolon"]
    "##);
}
