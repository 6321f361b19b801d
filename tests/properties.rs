use descent::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_accounts_for_every_item(s in "\\PC{1,24}") {
        let input = s.as_str();
        let reply = Any.parse(input);
        prop_assert!(reply.success());
        prop_assert_eq!(reply.data().ok().copied(), input.chars().next());
        prop_assert_eq!(1 + Stream::len(reply.rest()), Stream::len(&input));
    }

    #[test]
    fn any_on_byte_slices(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let input = &bytes[..];
        let reply = Any.parse(input);
        match input.split_first() {
            Some((first, rest)) => {
                prop_assert_eq!(reply, Reply::ok(*first, rest));
            }
            None => {
                prop_assert_eq!(reply.data(), Err(&ParseError::UnexpectedEof));
            }
        }
    }

    #[test]
    fn successful_parses_lose_nothing(s in "[a-z0-9 ]{0,32}") {
        let input = s.as_str();
        let grammar = Alpha.or(Digit).one_or_more().and(Space.zero_or_more()).zero_or_more();
        let reply = grammar.parse(input);
        prop_assert!(reply.success());
        let rest = *reply.rest();
        let consumed = input.consumed(&rest);
        prop_assert_eq!(format!("{consumed}{rest}"), s.clone());
        prop_assert_eq!(reply.data().ok().map(String::as_str), Some(consumed));
    }

    #[test]
    fn zero_or_more_never_fails(s in "\\PC{0,32}") {
        let input = s.as_str();
        let reply = Digit.zero_or_more().parse(input);
        prop_assert!(reply.success());
        let digits: String = input.chars().take_while(char::is_ascii_digit).collect();
        prop_assert_eq!(reply.data().ok(), Some(&digits));
    }

    #[test]
    fn ordered_choice_ignores_failed_branch_progress(s in "[ab]{1,8}") {
        let input = s.as_str();
        let p = Char('a').and(Char('a')).or(Any.and(Eof));
        let direct = Any.and(Eof).parse(input);
        let reply = p.parse(input);
        if !input.starts_with("aa") {
            prop_assert_eq!(reply, direct);
        }
    }

    #[test]
    fn sum_matches_independent_runs(s in "[a-z0-9]{0,4}") {
        let input = s.as_str();
        let forked = Digit.sum(Alpha).parse(input);
        prop_assert_eq!(forked.left, Digit.parse(input));
        prop_assert_eq!(forked.right, Alpha.parse(input));
    }
}
