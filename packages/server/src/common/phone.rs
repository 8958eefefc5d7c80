/// Mask a phone number for logs, keeping the last four digits.
///
/// `+15557654321` becomes `***4321`. Values of four characters or fewer are
/// fully masked.
pub fn mask_phone_number(phone_number: &str) -> String {
    let chars: Vec<char> = phone_number.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}
