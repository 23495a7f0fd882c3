use cadastro::registration::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = MemoryStore::new();
    let mut flow = RegistrationFlow::new();

    let mut company = CompanyInfo {
        legal_name: "Reutiliza Mais Ltda".into(),
        trade_name: "Reutiliza+".into(),
        email: "contato@reutilizamais.org".into(),
        cnpj: "11.222.333/0001-80".into(),
        legal_nature: "Associação Privada".into(),
        legal_representative: "Joana Pereira".into(),
        phone: "(21) 99876-5432".into(),
        role: "Presidente".into(),
        representative_cpf: None,
    };

    // ── 1. Rejected company data ──────────────────────────────────────
    println!("=== Company step ===");
    if let Err(e) = flow.submit_company(company.clone()) {
        println!("  rejected: {e}");
    }
    company.cnpj = "11.222.333/0001-81".into();
    match flow.submit_company(company) {
        Ok(step) => println!("  accepted, now at {step}"),
        Err(e) => println!("  rejected: {e}"),
    }

    // ── 2. Address ────────────────────────────────────────────────────
    println!("\n=== Address step ===");
    let address = Address {
        street: "Rua da Assembleia".into(),
        number: "10".into(),
        complement: "Sala 2101".into(),
        postal_code: "20011-000".into(),
        state: "rj".into(),
        city: "Rio de Janeiro".into(),
        district: "Centro".into(),
    };
    match flow.submit_address(address) {
        Ok(step) => println!("  accepted, now at {step}"),
        Err(e) => println!("  rejected: {e}"),
    }

    // ── 3. Confirmation ───────────────────────────────────────────────
    println!("\n=== Confirmation ===");
    if let Err(e) = flow.submit(&store).await {
        println!("  not yet: {e}");
    }
    if let Err(e) = flow.accept_terms(true) {
        println!("  cannot accept terms: {e}");
        return;
    }
    match flow.submit(&store).await {
        Ok(id) => {
            println!("  submitted as {id}");
            if let Some(doc) = store.get(DEFAULT_COLLECTION, &id) {
                for (key, value) in &doc {
                    println!("    {key}: {value}");
                }
            }
        }
        Err(e) => println!("  submission failed: {e}"),
    }
}
