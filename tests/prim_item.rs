use descent::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn any_takes_first_item() {
    let reply = Any.parse("ab");
    assert_eq!(reply, Reply::ok('a', "b"));
}

#[test]
fn any_on_empty_reports_eof() {
    let reply = Any.parse("");
    assert_eq!(reply.data(), Err(&ParseError::UnexpectedEof));
    assert_eq!(reply.message().as_deref(), Some("unexpected eof"));
    assert_eq!(*reply.rest(), "");
}

#[test]
fn eof_succeeds_only_on_empty() {
    let reply = Eof.parse("");
    assert!(reply.success());
    assert_eq!(*reply.rest(), "");

    let reply = Eof.parse("xy");
    assert_eq!(reply.data(), Err(&ParseError::ExpectedEof('x')));
    assert_eq!(*reply.rest(), "xy");
}

#[test]
fn const_consumes_nothing() {
    let reply = Const("v").parse("abc");
    assert_eq!(reply, Reply::ok("v", "abc"));

    let reply = constant(1u8).parse("");
    assert_eq!(reply, Reply::ok(1, ""));
}

#[test]
fn fail_keeps_input() {
    let reply = fail::<char>("nope").parse("abc");
    assert_eq!(reply.message().as_deref(), Some("nope"));
    assert_eq!(*reply.rest(), "abc");
}

#[test]
fn is_rejection_reports_advanced_remainder() {
    let p = is(|c: &char| c.is_uppercase());
    assert_eq!(p.parse("Ab"), Reply::ok('A', "b"));

    let reply = p.parse("ab");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('a')));
    assert_eq!(reply.message().as_deref(), Some("a not matched"));
    assert_eq!(*reply.rest(), "b");
}

#[test]
fn is_propagates_eof_untouched() {
    let reply = Is::new(|_: &char| true).parse("");
    assert_eq!(reply.data(), Err(&ParseError::UnexpectedEof));
}

#[test]
fn char_matches_equal_item() {
    assert_eq!(Char('x').parse("xyz"), Reply::ok('x', "yz"));
    let reply = Char('x').parse("yz");
    assert_eq!(reply.message().as_deref(), Some("y not matched"));
    assert_eq!(*reply.rest(), "z");
}

#[test]
fn char_classes() {
    assert_eq!(Space.parse("\n1"), Reply::ok('\n', "1"));
    assert_eq!(Digit.parse("9a"), Reply::ok('9', "a"));
    assert_eq!(Alpha.parse("ß!"), Reply::ok('ß', "!"));

    assert!(!Space.parse("a").success());
    assert!(!Digit.parse("a").success());
    assert!(!Alpha.parse("1").success());
}

#[test]
fn char_classes_on_bytes() {
    let input: &[u8] = b"1 a";
    let reply = Digit.right(Space).right(Alpha).parse(input);
    assert_eq!(reply.data(), Ok(&b'a'));
    assert!(reply.rest().is_empty());

    let reply = Alpha.parse(input);
    assert_eq!(reply.message().as_deref(), Some("49 not matched"));
}

#[test]
fn one_of_and_none_of() {
    assert_eq!(one_of("xyz").parse("yes"), Reply::ok('y', "es"));
    assert!(!one_of("xyz").parse("abc").success());
    assert_eq!(none_of(",;").parse("a,"), Reply::ok('a', ","));
    assert!(!none_of(",;").parse(";").success());
}

#[test]
fn parsers_are_reusable_across_streams() {
    let p = Digit;
    assert!(p.parse("1").success());
    assert!(!p.parse("x").success());
    assert!(p.parse("2").success());
}
