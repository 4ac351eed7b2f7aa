//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Questions use the same
    /// values for the type of records they ask for, plus a few more that
    /// select several types at once.
    ///
    /// The type carries constants for the record types commonly seen in
    /// Multicast DNS and DNS-based Service Discovery. Any other value is
    /// kept as is and displayed in the generic `TYPE` notation of
    /// [RFC 3597].
    ///
    /// See the [IANA registry] for all assigned values.
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    ///
    /// Used by DNS-SD to enumerate service instances.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    ///
    /// Used by DNS-SD for the key/value pairs describing a service instance.
    (TXT => 16, "TXT")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// Used by DNS-SD for the host and port of a service instance.
    (SRV => 33, "SRV")

    /// OPT pseudo-record.
    (OPT => 41, "OPT")

    /// Next secure record.
    ///
    /// Used by Multicast DNS responders to assert the non-existence of
    /// record types.
    (NSEC => 47, "NSEC")

    /// A request for all records.
    (ANY => 255, "ANY")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

//============ Testing =======================================================
