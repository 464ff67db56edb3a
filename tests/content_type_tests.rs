use spaces_deploy::{detect_content_type, ObjectKey};

fn corrected(key: &str, data: &[u8]) -> String {
    let key = ObjectKey::new(key.to_string()).unwrap();
    detect_content_type(data)
        .with_extension_override(key.extension())
        .to_string()
}

#[test]
fn plain_text_stylesheets_and_scripts_are_corrected() {
    assert_eq!(corrected("style.css", b"h1 { color: red }"), "text/css; charset=utf-8");
    assert_eq!(
        corrected("css/print.min.css", b"@media print { body { margin: 0 } }"),
        "text/css; charset=utf-8"
    );
    assert_eq!(
        corrected("js/app.js", b"'use strict';\nexport default 1;\n"),
        "application/javascript; charset=utf-8"
    );
}

#[test]
fn sniffed_types_other_than_plain_text_win() {
    // a script that starts like an HTML comment is sniffed as HTML and kept
    assert_eq!(corrected("legacy.js", b"<!-- hide\nalert(1)\n// -->"), "text/html; charset=utf-8");
    assert_eq!(corrected("weird.css", &[0x00, 0x01, 0x02]), "application/octet-stream");
}

#[test]
fn other_extensions_pass_through() {
    assert_eq!(corrected("notes.txt", b"hello"), "text/plain; charset=utf-8");
    assert_eq!(corrected("data.json", b"{\"a\": 1}"), "text/plain; charset=utf-8");
    assert_eq!(corrected("STYLE.CSS", b"body {}"), "text/plain; charset=utf-8");
    assert_eq!(corrected("Makefile", b"all:\n\techo hi\n"), "text/plain; charset=utf-8");
    assert_eq!(corrected("page.html", b"<html></html>"), "text/html; charset=utf-8");
}
