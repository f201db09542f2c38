#![expect(missing_docs)]

use core::fmt::Write;

use quotescan::{CarveOptions, carve_with, prune_tmpl_actions, scan_quote};

const ACTIONS: &str = r#"a {{ "}}" }} b "{{ x }}" {{ y }} c"#;

fn render_actions(src: &str, options: CarveOptions) -> String {
    let mut out = String::new();
    let mut rest = src;
    loop {
        let c = carve_with(rest, "{{", "}}", options);
        if !c.found {
            writeln!(out, "rest={:?}", c.before).unwrap();
            return out;
        }
        writeln!(out, "before={:?} middle={:?}", c.before, c.middle).unwrap();
        rest = c.after;
    }
}

fn render_spans(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs {
        let span = scan_quote(input);
        if span.found {
            writeln!(
                out,
                "{:?} {:?} {:?} {:?}",
                span.before, span.quote, span.quoted, span.after
            )
            .unwrap();
        } else {
            writeln!(out, "miss {:?}", span.before).unwrap();
        }
    }
    out
}

#[test]
fn snapshot_carve_literal() {
    insta::assert_snapshot!(render_actions(ACTIONS, CarveOptions::LITERAL), @r#"
    before="a " middle=" \""
    before="\" }} b \"" middle=" x "
    before="\" " middle=" y "
    rest=" c"
    "#);
}

#[test]
fn snapshot_carve_scan_end() {
    insta::assert_snapshot!(render_actions(ACTIONS, CarveOptions::SCAN_END), @r#"
    before="a " middle=" \"}}\" "
    before=" b \"" middle=" x "
    before="\" " middle=" y "
    rest=" c"
    "#);
}

#[test]
fn snapshot_carve_scan_both() {
    insta::assert_snapshot!(render_actions(ACTIONS, CarveOptions::SCAN_BOTH), @r#"
    before="a " middle=" \"}}\" "
    before=" b \"{{ x }}\" " middle=" y "
    rest=" c"
    "#);
}

#[test]
fn snapshot_scan_quote() {
    let inputs = [
        r#"before "quoted \"within\"" after"#,
        r"x 'it\'s' y",
        r"`C:\dir` tail",
        r#"bad "\q" escape"#,
        "“fancy” only",
    ];
    insta::assert_snapshot!(render_spans(&inputs), @r#"
    "before " Some('"') "quoted \"within\"" " after"
    "x " Some('\'') "it's" " y"
    "" Some('`') "C:\\dir" " tail"
    "bad " Some('"') "\\q" " escape"
    miss "“fancy” only"
    "#);
}

#[test]
fn snapshot_prune_tmpl_actions() {
    let chart = r#"metadata:
  name: "{{ include "app.fullname" . }}"
  labels:
    {{- with .Values.labels }}
    tier: "{{ .tier | default "}}" }}"
    {{- end }}
"#;
    insta::assert_snapshot!(prune_tmpl_actions(chart), @r#"
    metadata:
      name: ""
      labels:
        tier: ""
    "#);
}
