//! Integration tests for splitting message templates into variants.

use plurality::{Split, Variant, split_message};

#[test]
fn template_without_pipe_is_passthrough() {
    assert_eq!(split_message("apple"), Split::Passthrough);
    assert_eq!(split_message("  {0} nothing  "), Split::Passthrough);
    assert_eq!(split_message(""), Split::Passthrough);
}

#[test]
fn plain_variants_are_trimmed_in_order() {
    assert_eq!(
        split_message(" apple |  apples "),
        Split::Variants(vec![Variant::plain("apple"), Variant::plain("apples")])
    );
}

#[test]
fn explicit_rules_are_stripped() {
    assert_eq!(
        split_message("{0} none|{1} one|[2,Inf] many"),
        Split::Variants(vec![
            Variant::ruled("{0}", "none"),
            Variant::ruled("{1}", "one"),
            Variant::ruled("[2,Inf]", "many"),
        ])
    );
}

#[test]
fn rule_text_keeps_inner_spacing() {
    assert_eq!(
        split_message("{0}   no  apples|apples"),
        Split::Variants(vec![
            Variant::ruled("{0}", "no  apples"),
            Variant::plain("apples"),
        ])
    );
}

#[test]
fn rule_text_whitespace_becomes_spaces() {
    assert_eq!(
        split_message("{0}\tno\tapples|apples"),
        Split::Variants(vec![
            Variant::ruled("{0}", "no apples"),
            Variant::plain("apples"),
        ])
    );
    assert_eq!(
        split_message("[1,Inf[ one\n\tor more|none"),
        Split::Variants(vec![
            Variant::ruled("[1,Inf[", "one  or more"),
            Variant::plain("none"),
        ])
    );
}

#[test]
fn mixed_ruled_and_plain_variants() {
    assert_eq!(
        split_message("{0} There are none|There is one|There are :count"),
        Split::Variants(vec![
            Variant::ruled("{0}", "There are none"),
            Variant::plain("There is one"),
            Variant::plain("There are :count"),
        ])
    );
}

#[test]
fn rule_without_text_gives_empty_variant() {
    assert_eq!(
        split_message("{0}|apples"),
        Split::Variants(vec![Variant::ruled("{0}", ""), Variant::plain("apples")])
    );
}

#[test]
fn interval_inside_text_takes_first_token_as_rule() {
    // Detection is unanchored; the first token becomes the rule even when it
    // is not the interval itself.
    assert_eq!(
        split_message("Pick [1,3] items|none"),
        Split::Variants(vec![
            Variant::ruled("Pick", "[1,3] items"),
            Variant::plain("none"),
        ])
    );
}

#[test]
fn brackets_that_are_not_intervals_stay_plain() {
    assert_eq!(
        split_message("[draft] apple|{name} apples"),
        Split::Variants(vec![
            Variant::plain("[draft] apple"),
            Variant::plain("{name} apples"),
        ])
    );
}

#[test]
fn empty_pieces_are_kept() {
    assert_eq!(
        split_message("a||b"),
        Split::Variants(vec![
            Variant::plain("a"),
            Variant::plain(""),
            Variant::plain("b"),
        ])
    );
}

#[test]
fn resplitting_variant_text_is_stable() {
    let Split::Variants(variants) = split_message("{0} none|{1} one|[2,Inf] :count many")
    else {
        panic!("expected variants");
    };
    for variant in variants {
        assert_eq!(split_message(&variant.text), Split::Passthrough);
    }
}
