#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic for any keystroke sequence.
        let _ = cadastro::mask_cnpj(s);
        let _ = cadastro::mask_cpf(s);
        let _ = cadastro::mask_cep(s);
        let _ = cadastro::mask_uf(s);
        let _ = cadastro::mask_street_number(s);
        if let Some(amount) = cadastro::parse_brl_input(s) {
            let _ = cadastro::format_brl(amount);
        }
    }
});
