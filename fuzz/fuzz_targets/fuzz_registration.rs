#![no_main]

use cadastro::registration::{Address, CompanyInfo, validate_address, validate_company};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.split('|').map(str::to_string);
        let mut next = || parts.next().unwrap_or_default();
        let company = CompanyInfo {
            legal_name: next(),
            trade_name: next(),
            email: next(),
            cnpj: next(),
            legal_nature: next(),
            legal_representative: next(),
            phone: next(),
            role: next(),
            representative_cpf: Some(next()),
        };
        let address = Address {
            street: next(),
            number: next(),
            complement: next(),
            postal_code: next(),
            state: next(),
            city: next(),
            district: next(),
        };
        // Errors are fine, panics are not.
        let _ = validate_company(&company.normalized());
        let _ = validate_address(&address.normalized());
    }
});
