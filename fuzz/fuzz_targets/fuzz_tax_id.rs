#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; a parsed id must re-validate from its masked form.
        let cpf_ok = cadastro::validate_cpf(s);
        let cnpj_ok = cadastro::validate_cnpj(s);
        if let Ok(id) = cadastro::TaxId::parse(s) {
            assert!(cpf_ok || cnpj_ok);
            assert_eq!(cadastro::TaxId::parse(&id.to_string()).ok(), Some(id));
        }
    }
});
