use cadastro::core::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

#[test]
fn cpf_reference_fixtures() {
    assert!(validate_cpf("52998224725"));
    assert!(!validate_cpf("11111111111"));
    assert!(!validate_cpf("123"));
}

#[test]
fn cpf_more_valid_numbers() {
    for cpf in ["12345678909", "111.444.777-35", "935.411.347-80"] {
        assert!(validate_cpf(cpf), "{cpf} should be valid");
    }
}

#[test]
fn cpf_every_repeated_sequence_rejected() {
    for d in 0..=9 {
        let s = d.to_string().repeat(11);
        assert!(!validate_cpf(&s), "{s} should be rejected");
    }
}

#[test]
fn cpf_flipping_a_check_digit_invalidates() {
    assert!(!validate_cpf("52998224715"));
    assert!(!validate_cpf("52998224724"));
}

#[test]
fn cpf_is_not_a_cnpj() {
    assert!(!validate_cnpj("52998224725"));
}

#[test]
fn cpf_with_extra_digit_rejected() {
    assert!(!validate_cpf("529982247250"));
}

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

#[test]
fn cnpj_reference_fixtures() {
    assert!(validate_cnpj("11222333000181"));
    assert!(!validate_cnpj("11222333000180"));
    assert!(!validate_cnpj("00000000000000"));
}

#[test]
fn cnpj_more_valid_numbers() {
    for cnpj in [
        "11.222.333/0002-62",
        "04.557.883/0001-96",
        "19.131.000/0001-59",
        "00.623.904/0001-73",
    ] {
        assert!(validate_cnpj(cnpj), "{cnpj} should be valid");
    }
}

#[test]
fn cnpj_first_check_digit_wrong() {
    assert!(!validate_cnpj("11222333000191"));
}

#[test]
fn cnpj_wrong_length() {
    assert!(!validate_cnpj("1122233300018"));
    assert!(!validate_cnpj("112223330001811"));
    assert!(!validate_cnpj(""));
}

// ---------------------------------------------------------------------------
// Typed identifiers
// ---------------------------------------------------------------------------

#[test]
fn tax_id_parse_and_display() {
    let cpf: TaxId = "52998224725".parse().unwrap();
    assert_eq!(cpf.to_string(), "529.982.247-25");
    assert_eq!(cpf.digits(), "52998224725");

    let cnpj: TaxId = "11222333000181".parse().unwrap();
    assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    assert!(cnpj.is_cnpj());
}

#[test]
fn tax_id_error_reasons() {
    assert_eq!(
        "000.000.000-00".parse::<Cpf>(),
        Err(TaxIdError::RepeatedDigits)
    );
    assert_eq!(
        Cnpj::parse("11222333000180"),
        Err(TaxIdError::CheckDigitMismatch)
    );
    assert!(matches!(
        Cnpj::parse("abc"),
        Err(TaxIdError::WrongLength { expected: 14, found: 0 })
    ));
}

#[test]
fn tax_id_serde_as_digits() {
    let id = TaxId::parse("529.982.247-25").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"52998224725\"");
    let back: TaxId = serde_json::from_str("\"11.222.333/0001-81\"").unwrap();
    assert!(back.is_cnpj());
}

#[test]
fn masked_display_round_trips_through_parse() {
    let cnpj = Cnpj::parse("04557883000196").unwrap();
    assert_eq!(Cnpj::parse(&cnpj.to_string()).unwrap(), cnpj);
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

#[test]
fn email_shapes() {
    assert!(validate_email("financeiro@novva.com.br"));
    assert!(!validate_email("financeiro@novva"));
    assert!(!validate_email("financeiro novva@x.com"));
    assert!(!validate_email(""));
}

#[test]
fn postal_code_needs_eight_digits() {
    assert!(validate_cep("20040-020"));
    assert!(!validate_cep("20040-02"));
}

#[test]
fn state_code_shape_and_membership() {
    assert!(validate_uf("MG"));
    assert!(validate_uf("XX"));
    assert!(!is_known_uf("XX"));
    assert!(UFS.iter().all(|uf| validate_uf(uf) && is_known_uf(uf)));
}

#[test]
fn street_number_shape() {
    assert!(validate_street_number("7"));
    assert!(validate_street_number("230C"));
    assert!(!validate_street_number("s/n"));
}

// ---------------------------------------------------------------------------
// Masks and currency
// ---------------------------------------------------------------------------

#[test]
fn masks_feed_validators() {
    let typed = "11222333000181";
    let masked = mask_cnpj(typed);
    assert_eq!(masked, "11.222.333/0001-81");
    assert!(validate_cnpj(&masked));

    assert!(validate_cpf(&mask_cpf("52998224725")));
    assert!(validate_cep(&mask_cep("20040020")));
    assert!(validate_uf(&mask_uf("mg")));
}

#[test]
fn street_number_mask_rejects_keystrokes() {
    assert_eq!(mask_street_number("123"), Some("123".into()));
    assert_eq!(mask_street_number("123b"), Some("123B".into()));
    assert_eq!(mask_street_number("123bb"), None);
}

#[test]
fn currency_field_typing() {
    let mut typed = String::new();
    let mut shown = Vec::new();
    for key in ['1', '2', '3', '4', '5'] {
        typed.push(key);
        let amount = parse_brl_input(&typed).unwrap();
        shown.push(format_brl(amount));
    }
    assert_eq!(
        shown,
        vec!["R$ 0,01", "R$ 0,12", "R$ 1,23", "R$ 12,34", "R$ 123,45"]
    );
}

#[test]
fn currency_large_amount() {
    assert_eq!(format_brl(dec!(12345678.9)), "R$ 12.345.678,90");
    assert_eq!(format_brl(dec!(100)), "R$ 100,00");
    assert_eq!(format_brl(dec!(1000)), "R$ 1.000,00");
}
