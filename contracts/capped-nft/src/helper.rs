use super::*;

/// Build the metadata location of a token by appending its decimal ID to
/// the base URL. No separator is inserted, the base URL carries its own.
pub fn build_token_url(base_url: &str, token_id: ContractTokenId) -> String {
    let mut url = String::from(base_url);
    push_token_id(&mut url, token_id);
    url
}

pub fn push_token_id(string: &mut String, token_id: ContractTokenId) {
    // u32::MAX has 10 decimal digits.
    let mut digits = [0u8; 10];
    let mut value = token_id.0;
    let mut len = 0;
    loop {
        digits[len] = (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }
    for digit in digits[..len].iter().rev() {
        string.push((digit + b'0') as char);
    }
}

pub fn token_metadata_event(
    base_url: &str,
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: build_token_url(base_url, token_id),
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        let cases: &[(u32, &str)] = &[
            (1, "1"),
            (9, "9"),
            (10, "10"),
            (42, "42"),
            (907, "907"),
            (u32::MAX, "4294967295"),
        ];

        for (id, expected) in cases {
            let mut rendered = String::new();
            push_token_id(&mut rendered, TokenIdU32(*id));
            claim_eq!(rendered.as_str(), *expected);
        }
    }

    #[concordium_test]
    fn token_url_building() {
        let url = build_token_url("https://nft.example.com/metadata/", TokenIdU32(7));
        claim_eq!(url.as_str(), "https://nft.example.com/metadata/7");
    }
}
