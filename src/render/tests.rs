use super::*;

fn render(fmt: &str, args: &[Arg<'_>]) -> std::string::String {
    let mut out: Renderer<256> = Renderer::new();
    out.render(fmt, args);
    out.as_str().into()
}

#[test]
fn test_literal_text_is_copied() {
    assert_eq!(render("hello, board", &[]), "hello, board");
}

#[test]
fn test_percent_escape() {
    assert_eq!(render("100%%", &[]), "100%");
    assert_eq!(render("%%d", &[Arg::Int(5)]), "%d");
}

#[test]
fn test_trailing_percent() {
    assert_eq!(render("50%", &[]), "50%");
}

#[test]
fn test_unknown_conversion_passes_through() {
    assert_eq!(render("%q", &[]), "%q");
    assert_eq!(render("a%zb", &[Arg::Int(1)]), "a%zb");
}

#[test]
fn test_decimal_zero() {
    assert_eq!(render("%d", &[Arg::Int(0)]), "0");
}

#[test]
fn test_decimal_signs() {
    assert_eq!(render("%d %d", &[Arg::Int(42), Arg::Int(-42)]), "42 -42");
}

#[test]
fn test_decimal_extremes() {
    assert_eq!(render("%d", &[Arg::Int(i32::MIN)]), "-2147483648");
    assert_eq!(render("%d", &[Arg::Int(i32::MAX)]), "2147483647");
}

#[test]
fn test_zero_padding_keeps_sign_first() {
    assert_eq!(render("%05d", &[Arg::Int(-3)]), "-0003");
    assert_eq!(render("%05d", &[Arg::Int(42)]), "00042");
}

#[test]
fn test_space_padding_puts_sign_by_digits() {
    assert_eq!(render("%5d", &[Arg::Int(-3)]), "   -3");
}

#[test]
fn test_left_justify() {
    assert_eq!(render("%-5d|", &[Arg::Int(7)]), "7    |");
    assert_eq!(render("%-5d|", &[Arg::Int(-7)]), "-7   |");
}

#[test]
fn test_left_justify_ignores_zero_flag() {
    assert_eq!(render("%-05d|", &[Arg::Int(7)]), "7    |");
}

#[test]
fn test_width_smaller_than_value() {
    assert_eq!(render("%2d", &[Arg::Int(12345)]), "12345");
}

#[test]
fn test_star_width() {
    assert_eq!(render("%*d|", &[Arg::Int(4), Arg::Int(9)]), "   9|");
    assert_eq!(render("%*d|", &[Arg::Int(-4), Arg::Int(9)]), "9   |");
}

#[test]
fn test_decimal_of_unsigned_does_not_wrap() {
    assert_eq!(render("%dHz", &[Arg::Uint(3_000_000_000)]), "3000000000Hz");
}

#[test]
fn test_hex() {
    assert_eq!(render("%x", &[Arg::Uint(255)]), "ff");
    assert_eq!(render("%x", &[Arg::Uint(0)]), "0");
    assert_eq!(render("%x", &[Arg::Uint(0xDEAD_BEEF)]), "deadbeef");
}

#[test]
fn test_hex_padding() {
    assert_eq!(render("%02x:%02x", &[Arg::Uint(0xb), Arg::Uint(0xeb)]), "0b:eb");
    assert_eq!(render("%4x|%-4x|", &[Arg::Uint(0xa), Arg::Uint(0xa)]), "   a|a   |");
}

#[test]
fn test_hex_of_negative_int_uses_twos_complement() {
    assert_eq!(render("%x", &[Arg::Int(-1)]), "ffffffff");
}

#[test]
fn test_char() {
    assert_eq!(render("[%c]", &[Arg::Char('k')]), "[k]");
    assert_eq!(render("[%3c]", &[Arg::Char('k')]), "[  k]");
    assert_eq!(render("[%c]", &[Arg::Char('é')]), "[?]");
}

#[test]
fn test_string_padding() {
    assert_eq!(render("[%8s]", &[Arg::Str("uart")]), "[    uart]");
    assert_eq!(render("[%-8s]", &[Arg::Str("uart")]), "[uart    ]");
    assert_eq!(render("[%08s]", &[Arg::Str("uart")]), "[    uart]");
}

#[test]
fn test_string_star_width() {
    assert_eq!(render("%-*s|", &[Arg::Int(6), Arg::Str("ab")]), "ab    |");
}

#[test]
fn test_float_default_precision() {
    assert_eq!(render("%f", &[Arg::Float(1.5)]), "1.500000");
}

#[test]
fn test_float_below_one_has_leading_zero_only_without_padding() {
    assert_eq!(render("%f", &[Arg::Float(0.5)]), "0.500000");
    assert_eq!(render("%.2f", &[Arg::Float(0.5)]), "0.50");
    assert_eq!(render("%3.2f", &[Arg::Float(0.5)]), "0.50");
    assert_eq!(render("%8.2f", &[Arg::Float(0.5)]), "     .50");
    assert_eq!(render("%-8.2f|", &[Arg::Float(0.5)]), ".50     |");
    assert_eq!(render("%08.2f", &[Arg::Float(0.5)]), "00000.50");
    assert_eq!(render("%6.2f", &[Arg::Float(-0.25)]), "  -.25");
}

#[test]
fn test_float_zero_precision_below_one() {
    assert_eq!(render("%.0f", &[Arg::Float(0.25)]), "0");
    assert_eq!(render("%.0f", &[Arg::Float(0.75)]), "1");
    assert_eq!(render("%4.0f", &[Arg::Float(0.75)]), "   1");
}

#[test]
fn test_float_round_half_up_on_remainder() {
    // 1.005 is stored slightly below 1.005, so the remainder after two digits
    // is under one half.
    assert_eq!(render("%.2f", &[Arg::Float(1.005)]), "1.00");
    assert_eq!(render("%.2f", &[Arg::Float(0.125)]), "0.13");
    assert_eq!(render("%.1f", &[Arg::Float(3.25)]), "3.3");
}

#[test]
fn test_float_carry_into_integer_part() {
    assert_eq!(render("%.2f", &[Arg::Float(9.996)]), "10.00");
    assert_eq!(render("%.2f", &[Arg::Float(0.999)]), "1.00");
    assert_eq!(render("%.1f", &[Arg::Float(99.95)]), "100.0");
}

#[test]
fn test_float_zero_precision() {
    assert_eq!(render("%.0f", &[Arg::Float(2.5)]), "3");
    assert_eq!(render("%.f", &[Arg::Float(7.25)]), "7");
}

#[test]
fn test_float_star_precision() {
    assert_eq!(render("%.*f", &[Arg::Int(3), Arg::Float(3.14159)]), "3.142");
    assert_eq!(render("%.*f", &[Arg::Int(-1), Arg::Float(1.5)]), "1.500000");
}

#[test]
fn test_float_negative_values() {
    assert_eq!(render("%.1f", &[Arg::Float(-2.5)]), "-2.5");
    assert_eq!(render("%08.2f", &[Arg::Float(-1.5)]), "-0001.50");
    assert_eq!(render("%-6.1f|", &[Arg::Float(3.25)]), "3.3   |");
}

#[test]
fn test_float_non_finite_does_not_panic() {
    assert_eq!(render("%.1f", &[Arg::Float(f64::NAN)]), "0.0");
    assert_eq!(render("%.0f", &[Arg::Float(f64::INFINITY)]), "18446744073709551615");
}

#[test]
fn test_float_precision_is_clamped() {
    let out = render("%.40f", &[Arg::Float(0.5)]);
    assert_eq!(out.len(), 2 + MAX_PRECISION);
}

#[test]
fn test_missing_arguments_render_empty() {
    assert_eq!(render("%d/%s/%x", &[]), "0//0");
}

#[test]
fn test_arguments_are_coerced() {
    assert_eq!(render("%d", &[Arg::Uint(7)]), "7");
    assert_eq!(render("%.1f", &[Arg::Int(2)]), "2.0");
    assert_eq!(render("%s", &[Arg::Int(2)]), "");
}

#[test]
fn test_from_conversions() {
    assert_eq!(Arg::from(3i32), Arg::Int(3));
    assert_eq!(Arg::from(3u8), Arg::Uint(3));
    assert_eq!(Arg::from(3usize), Arg::Uint(3));
    assert_eq!(Arg::from('x'), Arg::Char('x'));
    assert_eq!(Arg::from("x"), Arg::Str("x"));
    assert_eq!(Arg::from(0.5f32), Arg::Float(0.5));
}

#[test]
fn test_truncation_is_silent() {
    let mut out: Renderer<8> = Renderer::new();
    out.render("%s and more", &[Arg::Str("overflowing")]);
    assert_eq!(out.as_str(), "overflow");
    assert!(out.is_truncated());
}

#[test]
fn test_exact_fit_is_not_truncated() {
    let mut out: Renderer<4> = Renderer::new();
    out.render("%04d", &[Arg::Int(12)]);
    assert_eq!(out.as_str(), "0012");
    assert!(!out.is_truncated());
}

#[test]
fn test_huge_width_stops_at_capacity() {
    let mut out: Renderer<16> = Renderer::new();
    out.render("%999999999d", &[Arg::Int(1)]);
    assert_eq!(out.len(), 16);
    assert!(out.is_truncated());
}

#[test]
fn test_render_appends_until_cleared() {
    let mut out: Renderer<32> = Renderer::new();
    out.render("a=%d ", &[Arg::Int(1)]);
    out.render("b=%d", &[Arg::Int(2)]);
    assert_eq!(out.as_str(), "a=1 b=2");

    out.clear();
    assert!(out.is_empty());
}
