// dnsname-core/tests/sanitize_properties_tests.rs
//! Properties every sanitizer output must satisfy, checked over a corpus of awkward inputs.

use anyhow::Result;
use test_log::test;

use dnsname_core::{
    dns_labelize, dns_subdomainify, is_valid_dns_subdomain, validate_dns_subdomain, LABEL,
    LABEL_RULES, SUBDOMAIN,
};

fn corpus() -> Vec<String> {
    let mut inputs: Vec<String> = [
        "",
        " ",
        "\t\n ",
        "/",
        "//",
        "-",
        "_",
        ".",
        "simple",
        "ABCD",
        "test.opsani.com/My Amazing App",
        "test.opsani.com/Blake's Super Awesome App!",
        "..test.opsani.com/x!",
        "trailing-",
        "under_score",
        "MiXeD/Case With  Two Spaces",
        "ünïcödé nämé",
        "日本語",
        "!!!",
        "a/b/c/d",
        "0-already-1",
        "a\u{FEFF}b",
        "a\u{0085}b",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    inputs.push("0".repeat(300));
    inputs.push(".".repeat(253));
    inputs.push("-".repeat(64));
    inputs.push(format!("-{}", "a".repeat(300)));
    inputs.push(format!("{}_", "B".repeat(62)));
    inputs.push(format!("{} {}", "x".repeat(250), "y".repeat(10)));
    inputs
}

fn satisfies_label_grammar(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= LABEL.max_length
        && LABEL_RULES.is_allowed(name)
        && LABEL_RULES.starts_on_boundary(name)
        && LABEL_RULES.ends_on_boundary(name)
}

#[test]
fn subdomainify_output_always_validates() -> Result<()> {
    for input in corpus() {
        let name = dns_subdomainify(&input)?;
        assert!(is_valid_dns_subdomain(&name), "{:?} -> {:?}", input, name);
        assert!(name.len() <= SUBDOMAIN.max_length);
    }
    Ok(())
}

#[test]
fn labelize_output_always_fits_label_grammar() {
    for input in corpus() {
        let name = dns_labelize(&input);
        assert!(satisfies_label_grammar(&name), "{:?} -> {:?}", input, name);
    }
}

#[test]
fn sanitizers_are_idempotent() -> Result<()> {
    for input in corpus() {
        let once = dns_subdomainify(&input)?;
        assert_eq!(dns_subdomainify(&once)?, once);

        let label = dns_labelize(&input);
        assert_eq!(dns_labelize(&label), label);
    }
    Ok(())
}

#[test]
fn valid_names_pass_through_unchanged() -> Result<()> {
    for name in ["simple", "a", "test.opsani.com", "a-b.c-d", "0"] {
        validate_dns_subdomain(name)?;
        assert_eq!(dns_subdomainify(name)?, name);
    }
    assert_eq!(dns_labelize("Mixed_Case.label-9"), "Mixed_Case.label-9");
    Ok(())
}

#[test]
fn long_inputs_are_cut_to_the_limit() -> Result<()> {
    let zeros = "0".repeat(300);
    assert_eq!(dns_subdomainify(&zeros)?.len(), 253);
    assert_eq!(dns_labelize(&zeros).len(), 63);
    Ok(())
}

#[test]
fn leading_dots_get_prefixed() -> Result<()> {
    assert!(dns_subdomainify("..test.opsani.com/x!")?.starts_with("0-.."));
    Ok(())
}

#[test]
fn suffix_replaces_the_tail_of_full_length_names() -> Result<()> {
    let input = format!("{}-", "a".repeat(252));
    let name = dns_subdomainify(&input)?;
    assert_eq!(name.len(), 253);
    assert_eq!(name, format!("{}-1", "a".repeat(251)));
    Ok(())
}

#[test]
fn whitespace_follows_the_ecmascript_class() -> Result<()> {
    assert_eq!(dns_labelize("a\u{FEFF}b"), "a-b");
    assert_eq!(dns_subdomainify("a\u{FEFF}b")?, "a-b");
    assert_eq!(dns_labelize("a\u{0085}b"), "ab");
    assert_eq!(dns_subdomainify("a\u{0085}b")?, "ab");
    Ok(())
}

#[test]
fn sanitizers_are_safe_across_threads() -> Result<()> {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("Worker {}/Some App", i);
                (dns_subdomainify(&input), dns_labelize(&input))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (subdomain, label) = handle.join().expect("worker thread panicked");
        assert_eq!(subdomain?, format!("worker-{}.some-app", i));
        assert_eq!(label, format!("Worker-{}_Some-App", i));
    }
    Ok(())
}
