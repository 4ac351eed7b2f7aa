//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is the lowest four bits of
    /// the fourth octet of the message header. Multicast DNS requires it to
    /// be zero in all messages but receivers must silently accept other
    /// values.
    ///
    /// See [RFC 1035] and section 18.11 of [RFC 6762].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    (REFUSED => 5, "REFUSED")

    /// Name exists when it should not.
    (YXDOMAIN => 6, "YXDOMAIN")

    /// RR set exists when it should not.
    (YXRRSET => 7, "YXRRSET")

    /// RR set that should exist does not.
    (NXRRSET => 8, "NXRRSET")

    /// Server not authoritative for zone or client not authorized.
    (NOTAUTH => 9, "NOTAUTH")

    /// Name not contained in zone.
    (NOTZONE => 10, "NOTZONE")
}

//--- Default

/// The default is no error condition (NOERROR), the value of an all-zero header.
impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}

int_enum_str_with_prefix!(Rcode, "RCODE", u8, "unknown rcode");
