//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is relevant
    /// and it is the only one used with Multicast DNS.
    ///
    /// Classes are 16 bit values on the wire. In Multicast DNS, however, the
    /// top bit of the class field is reused as the unicast-response bit in
    /// questions and the cache-flush bit in records, leaving 15 bits for the
    /// class itself. Values decoded from messages are therefore never larger
    /// than `0x7FFF`.
    ///
    /// See [RFC 1034] for the introduction of classes and section 10.2 of
    /// [RFC 6762] for the reuse of the top bit.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    =>
    Class, u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class None.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

impl Class {
    /// Splits a Multicast DNS class field into its top bit and the class.
    ///
    /// The top bit is the unicast-response bit in questions and the
    /// cache-flush bit in resource records. The remaining 15 bits are the
    /// class.
    #[must_use]
    pub const fn split_top_bit(value: u16) -> (bool, Self) {
        (value & 0x8000 != 0, Class(value & 0x7FFF))
    }
}

//============ Testing =======================================================
