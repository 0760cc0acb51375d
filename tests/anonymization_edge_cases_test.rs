//! Edge case tests for the anonymization pipeline

use mascara::anonymization::{anonymize_text, AnonymizationEngine, AnonymizationOptions, PiiCategory};
use test_case::test_case;

fn mask(text: &str) -> String {
    anonymize_text(text, &AnonymizationOptions::default())
}

fn mask_names(text: &str) -> String {
    anonymize_text(text, &AnonymizationOptions::with_names())
}

#[test_case("123.456.789" ; "nine digits in cpf grouping")]
#[test_case("12.345.678/9012" ; "cnpj missing check digits")]
#[test_case("1234-5678" ; "phone without area code")]
#[test_case("123.456.789-0" ; "cpf missing one digit")]
fn test_near_matches_pass_through(input: &str) {
    assert_eq!(mask(input), input);
}

#[test]
fn test_near_matches_counted_in_report() {
    let engine = AnonymizationEngine::new().expect("Failed to create engine");
    let outcome = engine.anonymize_with_report("ramal 3456-7890", &AnonymizationOptions::default());

    assert_eq!(outcome.text, "ramal 3456-7890");
    assert_eq!(outcome.report.masked(PiiCategory::Phone), 0);
    assert_eq!(outcome.report.untouched(PiiCategory::Phone), 1);
}

#[test]
fn test_plain_eleven_digits_are_taken_as_cpf() {
    // The CPF pass runs before the phone pass
    assert_eq!(mask("11912345678"), "***.123.456-**");
}

#[test]
fn test_plain_fourteen_digits_are_cnpj() {
    assert_eq!(mask("11222333000181"), "**.***.333/0001-**");
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(mask("   \n\t "), "   \n\t ");
    assert_eq!(mask_names("   "), "   ");
}

#[test]
fn test_very_long_text() {
    let chunk = "Cliente Ana, email ana@loja.com, CPF 123.456.789-09; ";
    let text = chunk.repeat(2_000);

    let masked = mask_names(&text);
    let expected = "C* A*, email a*@l*.com, CPF ***.456.789-**; ".repeat(2_000);
    assert_eq!(masked, expected);
}

#[test]
fn test_multiline_text() {
    let text = "Nome: Carla\nCPF: 123.456.789-09\nFone: (31) 99876-5432\n";
    assert_eq!(
        mask_names(text),
        "N*: C*\nCPF: ***.456.789-**\nF*: (31) *****-5432\n"
    );
}

#[test]
fn test_non_latin_text_untouched() {
    let text = "Привет, 世界! Ωmega";
    assert_eq!(mask_names(text), text);
}

#[test]
fn test_emoji_next_to_pii() {
    assert_eq!(mask("📧 joao@email.com 📞"), "📧 j*@e*.com 📞");
}

#[test]
fn test_excluded_months_and_titles() {
    let text = "Em Janeiro, Fevereiro e Dezembro a Dra atendeu o Doutor Paulo.";
    assert_eq!(
        mask_names(text),
        "E* Janeiro, Fevereiro e Dezembro a Dra atendeu o Doutor P*."
    );
}

#[test]
fn test_exclusions_are_case_sensitive() {
    assert_eq!(mask_names("JANEIRO janeiro Janeiro"), "JANEIRO janeiro Janeiro");
    assert_eq!(mask_names("Doutora"), "D*");
}

#[test_case("Ela disse 'Carla' ontem", "E* disse 'C*' ontem" ; "quoted name in sentence")]
#[test_case("'Carla'", "'C*'" ; "quoted name alone")]
#[test_case("O'neil e 'Ana'", "O* e 'A*'" ; "inner apostrophe next to quoted name")]
#[test_case("'O'neil'", "'O*'" ; "quoted name with inner apostrophe")]
#[test_case("Ana' e Bia'", "A*' e B*'" ; "trailing apostrophe kept")]
fn test_apostrophes_around_names(input: &str, expected: &str) {
    assert_eq!(mask_names(input), expected);
}

#[test]
fn test_parenthesized_number_without_area_code_untouched() {
    assert_eq!(mask("ligue (2134567890) hoje"), "ligue (2134567890) hoje");
}

#[test]
fn test_masked_output_is_stable() {
    let once = mask_names("Ana ana@x.com 123.456.789-09 (11) 91234-5678");
    let twice = mask_names(&once);
    assert_eq!(once, twice);
}
