//! Two peers run a SPAKE2 handshake over P-256 and compare the result.

use dpake::prelude::*;
use dpake::rand::rngs::OsRng;

fn main() -> Result<()> {
    let registry = HashRegistry::default();
    let params = Parameters::<NistP256>::builder()
        .group("secp256r1")
        .hash("SHA-256")
        .password(b"top!secret")
        .identities(b"Jack", "René".as_bytes())
        .context(b"dpake example")
        .build::<NistP256>(&registry)?;

    let mut rng = OsRng;
    let mut jack = Context::new(PeerId::PeerA, &params);
    let mut rene = Context::new(PeerId::PeerB, &params);

    // Either side may go first; the messages travel out of band
    let jack_message = jack.generate_message(&mut rng)?;
    let rene_message = rene.generate_message(&mut rng)?;
    println!("Jack sends {}", hex::encode(&jack_message));
    println!("René sends {}", hex::encode(&rene_message));

    let rene_secret = rene.process_message(&jack_message)?;
    let jack_secret = jack.process_message(&rene_message)?;

    println!("Jack derived {}", hex::encode(jack_secret.as_bytes()));
    println!("René derived {}", hex::encode(rene_secret.as_bytes()));
    if jack_secret == rene_secret {
        println!("Shared secrets match");
    } else {
        println!("Shared secrets differ");
    }
    Ok(())
}
