use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::models::Booking;

use super::short_date;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const ROW_HEIGHT: f32 = 5.0;
const BOTTOM_MARGIN: f32 = 15.0;

/// Column captions and their x offsets on the A4 page, in mm.
const COLUMNS: [(&str, f32); 7] = [
    ("Nome", 14.0),
    ("CPF", 52.0),
    ("RG", 80.0),
    ("Telefone", 104.0),
    ("Email", 130.0),
    ("Data Nasc.", 162.0),
    ("Local de Embarque", 182.0),
];

fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

/// Render the passenger list as an in-memory A4 document: title, package
/// header lines, then a table that flows across pages.
pub fn passenger_pdf(
    bookings: &[Booking],
    package_name: Option<&str>,
    travel_month: Option<&str>,
) -> Result<Vec<u8>, String> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Lista de Passageiros", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Camada 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    layer.use_text("Lista de Passageiros", 18.0, Mm(14.0), Mm(275.0), &bold);

    let mut y = 265.0;
    if let Some(name) = package_name {
        layer.use_text(format!("Pacote: {name}"), 12.0, Mm(14.0), Mm(y), &regular);
        y -= 6.0;
    }
    if let Some(month) = travel_month {
        layer.use_text(format!("Data: {month}"), 12.0, Mm(14.0), Mm(y), &regular);
        y -= 6.0;
    }
    layer.use_text(
        format!("Total de passageiros: {}", bookings.len()),
        12.0,
        Mm(14.0),
        Mm(y),
        &regular,
    );
    y -= 6.0;
    layer.use_text(
        format!("Data de emissão: {}", chrono::Utc::now().format("%d/%m/%Y")),
        12.0,
        Mm(14.0),
        Mm(y),
        &regular,
    );
    y -= 12.0;

    let draw_table_header = |layer: &printpdf::PdfLayerReference, y: f32| {
        for (caption, x) in COLUMNS {
            layer.use_text(caption, 9.0, Mm(x), Mm(y), &bold);
        }
    };

    draw_table_header(&layer, y);
    y -= ROW_HEIGHT;

    for booking in bookings {
        if y < BOTTOM_MARGIN {
            let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Camada 1");
            layer = doc.get_page(page).get_layer(layer_idx);
            y = PAGE_HEIGHT - 15.0;
            draw_table_header(&layer, y);
            y -= ROW_HEIGHT;
        }

        let cells = [
            fit(&booking.full_name, 22),
            booking.cpf.clone(),
            fit(&booking.rg, 13),
            booking.phone.clone(),
            fit(&booking.email, 19),
            short_date(&booking.birth_date).to_string(),
            fit(&booking.boarding_location, 16),
        ];
        for ((_, x), cell) in COLUMNS.iter().zip(cells.iter()) {
            layer.use_text(cell, 8.0, Mm(*x), Mm(y), &regular);
        }
        y -= ROW_HEIGHT;
    }

    doc.save_to_bytes().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(i: usize) -> Booking {
        Booking {
            id: format!("b-{i}"),
            travel_package_id: "pkg-1".to_string(),
            user_id: None,
            full_name: format!("Passageiro {i}"),
            rg: "12.345.678-9".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: "1990-05-12".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: format!("p{i}@example.com"),
            boarding_location: "Terminal Tietê".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let bookings: Vec<Booking> = (0..3).map(booking).collect();
        let bytes = passenger_pdf(&bookings, Some("Praia de Maresias"), Some("Janeiro/2025"))
            .expect("pdf renders");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_lists_flow_across_pages() {
        let bookings: Vec<Booking> = (0..120).map(booking).collect();
        let bytes = passenger_pdf(&bookings, None, None).expect("pdf renders");
        assert!(bytes.starts_with(b"%PDF"));
        // more rows than fit on one page must not panic or truncate output
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("curto", 10), "curto");
        assert_eq!(fit("um nome bastante longo", 10), "um nome b…");
    }
}
