use crate::models::Booking;

use super::short_date;

/// Fixed column set of the passenger list, in export order.
pub const PASSENGER_HEADERS: [&str; 7] = [
    "Nome Completo",
    "CPF",
    "RG",
    "Email",
    "Telefone",
    "Data Nascimento",
    "Local de Embarque",
];

fn csv_quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One header line plus one line per booking, same field order every row.
pub fn passenger_csv(bookings: &[Booking]) -> String {
    let mut lines = Vec::with_capacity(bookings.len() + 1);
    lines.push(PASSENGER_HEADERS.join(","));

    for booking in bookings {
        let row = [
            booking.full_name.as_str(),
            booking.cpf.as_str(),
            booking.rg.as_str(),
            booking.email.as_str(),
            booking.phone.as_str(),
            short_date(&booking.birth_date),
            booking.boarding_location.as_str(),
        ];
        lines.push(row.iter().map(|f| csv_quote(f)).collect::<Vec<_>>().join(","));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(name: &str) -> Booking {
        Booking {
            id: format!("b-{name}"),
            travel_package_id: "pkg-1".to_string(),
            user_id: None,
            full_name: name.to_string(),
            rg: "12.345.678-9".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: "1990-05-12T00:00:00.000Z".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "p@example.com".to_string(),
            boarding_location: "Terminal Tietê".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn one_header_plus_one_line_per_booking() {
        let bookings = vec![booking("Ana"), booking("Bia"), booking("Caio")];
        let csv = passenger_csv(&bookings);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], PASSENGER_HEADERS.join(","));
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), PASSENGER_HEADERS.len());
        }
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut b = booking("Ana");
        b.boarding_location = "Tietê, plataforma 2".to_string();
        let csv = passenger_csv(&[b]);
        assert!(csv.contains("\"Tietê, plataforma 2\""));
    }

    #[test]
    fn birth_date_keeps_only_the_date_part() {
        let csv = passenger_csv(&[booking("Ana")]);
        assert!(csv.contains(",1990-05-12,"));
        assert!(!csv.contains("00:00:00"));
    }

    #[test]
    fn empty_list_is_just_the_header() {
        assert_eq!(passenger_csv(&[]), PASSENGER_HEADERS.join(","));
    }
}
