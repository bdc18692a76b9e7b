// ============================================================================
// FORMAT - Formateo puro de números y fechas (testeable sin navegador)
// ============================================================================

use chrono::NaiveDateTime;

/// Agrupar miles con punto y decimales con coma (convención es-CO)
/// Equivalente al toLocaleString() del cliente original
pub fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    // Redondear a centavos para evitar arrastres de coma flotante
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = cents / 100;
    let frac_part = cents % 100;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac_part != 0 {
        out.push_str(&format!(",{:02}", frac_part));
    }
    out
}

/// Formatear un monto con el símbolo de pesos
pub fn format_money(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Formatear un timestamp ISO del backend (LocalDateTime de Spring)
/// como fecha corta dd/mm/aaaa. Si no parsea, se muestra tal cual.
pub fn format_date(raw: &str) -> String {
    match raw.parse::<NaiveDateTime>() {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn agrupa_miles_con_punto() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(950.0), "950");
        assert_eq!(group_thousands(2500000.0), "2.500.000");
        assert_eq!(group_thousands(1234567.0), "1.234.567");
    }

    #[test]
    fn conserva_decimales_solo_si_existen() {
        assert_eq!(group_thousands(1500.5), "1.500,50");
        assert_eq!(group_thousands(1500.999), "1.501");
    }

    #[test]
    fn montos_negativos() {
        assert_eq!(group_thousands(-1200.0), "-1.200");
    }

    #[test]
    fn monto_con_simbolo() {
        assert_eq!(format_money(3200000.0), "$3.200.000");
    }

    #[test]
    fn fecha_de_spring_local_date_time() {
        assert_eq!(format_date("2024-03-15T10:30:00"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T10:30:00.123456"), "15/03/2024");
    }

    #[test]
    fn fecha_no_parseable_se_muestra_cruda() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date(""), "");
    }
}
