use cadastro::core::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Tax identifiers ────────────────────────────────────────────
    println!("=== CPF / CNPJ ===");
    for input in [
        "529.982.247-25",
        "111.111.111-11",
        "11.222.333/0001-81",
        "11.222.333/0001-80",
        "123",
    ] {
        match TaxId::parse(input) {
            Ok(id) if id.is_cpf() => println!("  {input:<20} valid CPF  {id}"),
            Ok(id) => println!("  {input:<20} valid CNPJ {id}"),
            Err(e) => println!("  {input:<20} rejected: {e}"),
        }
    }

    // ── 2. Field validators ───────────────────────────────────────────
    println!("\n=== Fields ===");
    println!("  email 'contato@novva.com.br': {}", validate_email("contato@novva.com.br"));
    println!("  email 'contato@novva':        {}", validate_email("contato@novva"));
    println!("  CEP '01310-100':              {}", validate_cep("01310-100"));
    println!("  UF 'SP' known:                {}", is_known_uf("SP"));
    println!("  number '12B':                 {}", validate_street_number("12B"));

    // ── 3. Keystroke masks ────────────────────────────────────────────
    println!("\n=== Masks ===");
    let mut typed = String::new();
    for key in "11222333000181".chars() {
        typed.push(key);
        println!("  {:<14} → {}", typed, mask_cnpj(&typed));
    }

    // ── 4. Currency ───────────────────────────────────────────────────
    println!("\n=== BRL ===");
    if let Some(amount) = parse_brl_input("150075") {
        println!("  typed 150075 → {}", format_brl(amount));
    }
    println!("  {}", format_brl(dec!(1234567.891)));
}
