use cadastro::core::Cpf;
use cadastro::tomador::*;

fn main() {
    let owner = match Cpf::parse("529.982.247-25") {
        Ok(cpf) => cpf,
        Err(e) => {
            eprintln!("invalid owner CPF: {e}");
            return;
        }
    };
    let mut book = CnpjBook::new(owner);
    println!("Collection: {}", book.collection_path());

    for (cnpj, apelido) in [
        ("11.222.333/0001-81", "Matriz"),
        ("11.222.333/0002-62", ""),
        ("11.222.333/0001-81", "Duplicada"),
        ("11.222.333/0001-80", "Inválida"),
    ] {
        match book.add(cnpj, apelido) {
            Ok(entry) => println!("  added   {} ({})", entry.cnpj, entry.apelido),
            Err(e) => println!("  skipped {cnpj}: {e}"),
        }
    }

    if let Err(e) = book.rename("11222333000262", "Filial Centro") {
        println!("  rename failed: {e}");
    }

    println!("\nRegistered:");
    for entry in book.iter() {
        println!("  {} {}", entry.cnpj, entry.apelido);
    }

    match book.remove_many(&["11222333000181", "11222333000262"]) {
        Ok(removed) => println!("\nRemoved {} CNPJs, {} left", removed.len(), book.len()),
        Err(e) => println!("\nRemove failed: {e}"),
    }
}
