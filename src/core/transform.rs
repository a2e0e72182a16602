use crate::domain::model::{DestinationUser, SourceAddress, SourceUser};

/// Tokens dropped anywhere in a name. Matched case-sensitively against the
/// whole token once trailing periods are removed.
pub const HONORIFICS: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Rev", "Hon", "Msgr", "Messrs", "Mmes", "Jr", "Sr", "Esq",
    "Rt", "St",
];

/// Trailing tokens skipped when picking the last name.
pub const GENERATIONAL_SUFFIXES: &[&str] = &["Jr", "Sr"];

pub const ROMAN_NUMERAL_CHARS: &[char] = &['I', 'V'];

/// 國碼前綴，只移除字串開頭的一次
pub const COUNTRY_CODE_PREFIX: &str = "1-";

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub fn is_honorific(token: &str) -> bool {
    HONORIFICS.contains(&token.trim_end_matches('.'))
}

pub fn is_generational_suffix(token: &str) -> bool {
    let bare = token.trim_end_matches('.');
    GENERATIONAL_SUFFIXES.contains(&bare)
        || (!bare.is_empty() && bare.chars().all(|c| ROMAN_NUMERAL_CHARS.contains(&c)))
}

/// 拆解姓名：去掉稱謂後第一個 token 為名，去掉結尾世代後綴後最後一個 token 為姓。
/// 沒有剩下的 token 時對應欄位為 None。
pub fn parse_name(name: &str) -> ParsedName {
    let mut tokens = name.split_whitespace().filter(|token| !is_honorific(token));

    let first_name = tokens.next().map(str::to_string);

    let mut remaining: Vec<&str> = tokens.collect();
    while remaining
        .last()
        .is_some_and(|token| is_generational_suffix(token))
    {
        remaining.pop();
    }
    let last_name = remaining.pop().map(str::to_string);

    ParsedName {
        first_name,
        last_name,
    }
}

pub fn format_address(address: &SourceAddress) -> String {
    format!("{}, {}, {}", address.street, address.city, address.zipcode)
}

/// Drops one leading country code, keeps digits only and truncates.
/// Short numbers are returned as-is without padding.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .strip_prefix(COUNTRY_CODE_PREFIX)
        .unwrap_or(phone)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

pub fn transform_user(user: &SourceUser) -> DestinationUser {
    let ParsedName {
        first_name,
        last_name,
    } = parse_name(&user.name);

    if last_name.is_none() {
        tracing::debug!("No last name found in '{}'", user.name);
    }

    DestinationUser {
        first_name,
        last_name,
        company_name: user.company.name.clone(),
        company_full_address: format_address(&user.address),
        website: user.website.clone(),
        phone: normalize_phone(&user.phone),
    }
}

/// 1:1 轉換，保持輸入順序
pub fn transform_users(users: &[SourceUser]) -> Vec<DestinationUser> {
    users.iter().map(transform_user).collect()
}
