//! Static membership check for known disposable-email domains.
//!
//! The set is informational: a hit never blocks verification, it only
//! annotates the report.

use phf::phf_set;

static DISPOSABLE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "0-mail.com",
    "10minutemail.com",
    "10minutemail.net",
    "20minutemail.com",
    "33mail.com",
    "anonbox.net",
    "anonymbox.com",
    "bccto.me",
    "burnermail.io",
    "byom.de",
    "chacuo.net",
    "correotemporal.org",
    "crazymailing.com",
    "deadaddress.com",
    "discard.email",
    "disposablemail.com",
    "dispostable.com",
    "dropmail.me",
    "emailondeck.com",
    "emailsensei.com",
    "emltmp.com",
    "fakeinbox.com",
    "fakemailgenerator.com",
    "getairmail.com",
    "getnada.com",
    "guerrillamail.biz",
    "guerrillamail.com",
    "guerrillamail.de",
    "guerrillamail.info",
    "guerrillamail.net",
    "guerrillamail.org",
    "guerrillamailblock.com",
    "harakirimail.com",
    "inboxalias.com",
    "inboxbear.com",
    "incognitomail.org",
    "jetable.org",
    "kasmail.com",
    "koszmail.pl",
    "kurzepost.de",
    "lifebyfood.com",
    "linshiyouxiang.net",
    "mail-temp.com",
    "mail7.io",
    "mailcatch.com",
    "maildrop.cc",
    "maildu.de",
    "mailexpire.com",
    "mailforspam.com",
    "mailinator.com",
    "mailinator.net",
    "mailinator.org",
    "mailnesia.com",
    "mailnull.com",
    "mailsac.com",
    "mailtemp.info",
    "meltmail.com",
    "mintemail.com",
    "mohmal.com",
    "moakt.com",
    "mt2015.com",
    "mytrashmail.com",
    "nada.email",
    "no-spam.ws",
    "nospam.ze.tc",
    "nowmymail.com",
    "objectmail.com",
    "obobbo.com",
    "odnorazovoe.ru",
    "one-time.email",
    "onewaymail.com",
    "opayq.com",
    "owlymail.com",
    "pokemail.net",
    "proxymail.eu",
    "rcpt.at",
    "receiveee.com",
    "rhyta.com",
    "sharklasers.com",
    "shieldemail.com",
    "sogetthis.com",
    "spam4.me",
    "spamavert.com",
    "spambog.com",
    "spambog.de",
    "spambog.ru",
    "spambox.us",
    "spamex.com",
    "spamgourmet.com",
    "spamhole.com",
    "spaml.com",
    "superrito.com",
    "teleworm.us",
    "temp-mail.io",
    "temp-mail.org",
    "temp-mail.ru",
    "tempail.com",
    "tempemail.net",
    "tempinbox.com",
    "tempmail.dev",
    "tempmailaddress.com",
    "tempmailer.com",
    "tempr.email",
    "throwawaymail.com",
    "tmail.ws",
    "tmailinator.com",
    "trash-mail.com",
    "trash-mail.de",
    "trashmail.at",
    "trashmail.com",
    "trashmail.me",
    "trashmail.net",
    "trbvm.com",
    "wegwerfmail.de",
    "wegwerfmail.net",
    "wegwerfmail.org",
    "yopmail.com",
    "yopmail.fr",
    "yopmail.net",
    "zehnminutenmail.de",
    "zetmail.com",
};

/// True when `domain` (case-insensitive) is a known disposable provider.
pub fn is_disposable_domain(domain: &str) -> bool {
    let domain = domain.trim().trim_end_matches('.');
    if domain.is_ascii() {
        DISPOSABLE_DOMAINS.contains(domain.to_ascii_lowercase().as_str())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_is_disposable() {
        assert!(is_disposable_domain("mailinator.com"));
        assert!(is_disposable_domain("yopmail.fr"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(is_disposable_domain("Mailinator.COM"));
        assert!(is_disposable_domain("mailinator.com."));
    }

    #[test]
    fn regular_domains_are_not_flagged() {
        assert!(!is_disposable_domain("gmail.com"));
        assert!(!is_disposable_domain("example.org"));
        assert!(!is_disposable_domain(""));
    }
}
